//! The sweep executor: walks the sorted event queue, keeping
//! an ordered set of live left events, and computes each event's
//! `inside_out`/`other_inside_out`/`edge_type`/`in_result` flags from its
//! immediate sweep-line predecessor.

use crate::compare::{queue_order, sweep_order};
use crate::error::ClipError;
use crate::event::{EventId, EventPool, Polarity};
use crate::operator::Operator;
use crate::segment::InputSet;

/// Runs the sweep over `queue` (already built, not yet sorted) and leaves
/// every event's flags set in `pool`. Returns the queue in its final sorted
/// (queue-order) form, which the connector walks next.
pub fn run_sweep(pool: &mut EventPool, mut queue: Vec<EventId>) -> Result<Vec<EventId>, ClipError> {
    {
        let ordering: &EventPool = pool;
        queue.sort_by(|&a, &b| queue_order(ordering, a, b));
    }
    check_queue_consistency(pool, &queue)?;

    let mut active: Vec<EventId> = Vec::new();

    for &id in &queue {
        match pool.get(id).polarity {
            Polarity::Left => {
                let pos = insertion_position(pool, &active, id);
                let predecessor = if pos > 0 { Some(active[pos - 1]) } else { None };
                compute_flags(pool, id, predecessor);
                active.insert(pos, id);
            }
            Polarity::Right => {
                let twin = pool.get(id).twin;
                let pos = active
                    .iter()
                    .position(|&e| e == twin)
                    .ok_or(ClipError::SweepLineConflict { detail: "right event with no active left twin" })?;
                active.remove(pos);
                let in_result = pool.get(twin).in_result;
                pool.get_mut(id).in_result = in_result;
            }
        }
    }

    if !active.is_empty() {
        log::warn!("{} left events remained active after the sweep", active.len());
        return Err(ClipError::SweepLineConflict { detail: "left events remained active after the sweep" });
    }

    Ok(queue)
}

fn insertion_position(pool: &EventPool, active: &[EventId], id: EventId) -> usize {
    for (i, &e) in active.iter().enumerate() {
        if sweep_order(pool, e, id) == core::cmp::Ordering::Greater {
            return i;
        }
    }
    active.len()
}

fn same_geometry(pool: &EventPool, a: EventId, b: EventId) -> bool {
    let ea = pool.get(a);
    let eb = pool.get(b);
    ea.point == eb.point
        && pool.get(ea.twin).point == pool.get(eb.twin).point
        && ea.piece_ctrl == eb.piece_ctrl
}

fn compute_flags(pool: &mut EventPool, id: EventId, predecessor: Option<EventId>) {
    let (inside_out, other_inside_out) = match predecessor {
        None => (false, true),
        Some(pred) => {
            let same_input = pool.get(pred).input == pool.get(id).input;
            let pred_inside_out = pool.get(pred).inside_out;
            let pred_other_inside_out = pool.get(pred).other_inside_out;
            if same_input {
                (!pred_inside_out, !pred_other_inside_out)
            } else {
                (!pred_other_inside_out, !pred_inside_out)
            }
        }
    };

    pool.get_mut(id).inside_out = inside_out;
    pool.get_mut(id).other_inside_out = other_inside_out;

    let overlaps = match predecessor {
        Some(pred) => same_geometry(pool, pred, id),
        None => false,
    };

    let edge_type = if overlaps {
        let pred = predecessor.unwrap();
        if pool.get(pred).inside_out == inside_out {
            crate::event::EdgeType::SameTransition
        } else {
            crate::event::EdgeType::DifferentTransition
        }
    } else {
        crate::event::EdgeType::Normal
    };
    pool.get_mut(id).edge_type = edge_type;

    let input = pool.get(id).input;
    let mut in_result = [false; crate::operator::OPERATOR_COUNT];
    for &op in Operator::ALL.iter() {
        in_result[op.index()] = membership(op, edge_type, input, other_inside_out);
    }
    pool.get_mut(id).in_result = in_result;

    if overlaps {
        let pred = predecessor.unwrap();
        pool.get_mut(pred).in_result = [false; crate::operator::OPERATOR_COUNT];
    }
}

fn membership(
    op: Operator,
    edge_type: crate::event::EdgeType,
    input: InputSet,
    other_inside_out: bool,
) -> bool {
    use crate::event::EdgeType::*;
    use Operator::*;

    match edge_type {
        Normal => match op {
            Intersection => !other_inside_out,
            Union => other_inside_out,
            SubjectMinusClipping => {
                (input == InputSet::Subject && other_inside_out)
                    || (input == InputSet::Clipping && !other_inside_out)
            }
            ClippingMinusSubject => {
                (input == InputSet::Subject && !other_inside_out)
                    || (input == InputSet::Clipping && other_inside_out)
            }
        },
        SameTransition => matches!(op, Intersection | Union),
        DifferentTransition => matches!(op, SubjectMinusClipping | ClippingMinusSubject),
    }
}

fn check_queue_consistency(pool: &EventPool, queue: &[EventId]) -> Result<(), ClipError> {
    for window in queue.windows(2) {
        if queue_order(pool, window[0], window[1]) == core::cmp::Ordering::Greater {
            return Err(ClipError::InconsistentQueue { detail: "queue not sorted" });
        }
    }
    for &id in queue {
        let e = pool.get(id);
        if pool.get(e.twin).twin != id {
            return Err(ClipError::InconsistentQueue { detail: "twin link is not reciprocal" });
        }
    }
    Ok(())
}
