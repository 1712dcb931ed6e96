//! Sweep events and their owning pool: an append-only arena of events
//! addressed by index rather than pointer, so nothing is invalidated while
//! the sweep is still growing the set.

use pathclip_geom::Point;

use crate::segment::InputSet;

/// Index into an [`EventPool`]. Never invalidated once issued: the pool is
/// append-only for the lifetime of one invocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u32);

impl EventId {
    pub const INVALID: EventId = EventId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    Left,
    Right,
}

/// Whether an edge is new, or a duplicate of the edge inserted immediately
/// before it in sweep order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeType {
    Normal,
    SameTransition,
    DifferentTransition,
}

/// The two control points of a monotonic curve piece, in the direction the
/// piece's own left-to-right event pair samples it (`ctrl.0` near the left
/// event, `ctrl.1` near the right).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveControl {
    pub c1: Point,
    pub c2: Point,
}

#[derive(Clone, Debug)]
pub struct SweepEvent {
    pub point: Point,
    pub polarity: Polarity,
    pub twin: EventId,
    pub input: InputSet,
    /// Index of the source contour (within `input`) this event's segment
    /// belongs to.
    pub contour_index: usize,

    pub is_curve: bool,
    /// Control points of *this monotonic piece*, increasing-t oriented.
    pub piece_ctrl: Option<CurveControl>,
    /// Control points of the pre-split sub-curve this piece came from.
    /// Carried for a connector that wants to re-emit one cubic component
    /// spanning every piece instead of one component per piece; the
    /// current connector doesn't read it (see its own module docs).
    pub original_ctrl: Option<CurveControl>,
    /// The left event of the first monotonic piece of this sub-curve.
    pub piece_start: EventId,
    pub is_last_piece: bool,

    pub inside_out: bool,
    pub other_inside_out: bool,
    pub edge_type: EdgeType,

    /// Per-operator result membership, computed once during the sweep.
    /// Indexed by [`crate::Operator`] as `usize`.
    pub in_result: [bool; crate::operator::OPERATOR_COUNT],

    /// The event immediately below this one in the sweep-line at the
    /// moment it was inserted (only meaningful for left events); used both
    /// for flag computation and for the connector's depth/orientation pass.
    pub sweep_predecessor: Option<EventId>,

    /// Set once the connector has walked this event into an output contour.
    pub processed: bool,
}

impl SweepEvent {
    pub fn endpoint(&self) -> Point {
        self.point
    }
}

/// Owns every `SweepEvent` for one invocation. Other structures (the queue,
/// the sweep-line, the connector) hold `EventId`s into this pool rather
/// than the events themselves.
#[derive(Default)]
pub struct EventPool {
    events: Vec<SweepEvent>,
}

impl EventPool {
    pub fn new() -> Self {
        EventPool { events: Vec::new() }
    }

    pub fn get(&self, id: EventId) -> &SweepEvent {
        &self.events[id.index()]
    }

    pub fn get_mut(&mut self, id: EventId) -> &mut SweepEvent {
        &mut self.events[id.index()]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EventId> {
        (0..self.events.len() as u32).map(EventId)
    }

    /// Pushes a left/right twin pair for one monotonic sub-segment,
    /// returning `(left_id, right_id)`. `left_point`/`right_point` must
    /// already be in sweep order (`left_point` lexicographically smaller).
    #[allow(clippy::too_many_arguments)]
    pub fn push_pair(
        &mut self,
        left_point: Point,
        right_point: Point,
        input: InputSet,
        contour_index: usize,
        is_curve: bool,
        piece_ctrl: Option<CurveControl>,
        original_ctrl: Option<CurveControl>,
        is_last_piece: bool,
    ) -> (EventId, EventId) {
        let left_id = EventId(self.events.len() as u32);
        let right_id = EventId(self.events.len() as u32 + 1);

        self.events.push(SweepEvent {
            point: left_point,
            polarity: Polarity::Left,
            twin: right_id,
            input,
            contour_index,
            is_curve,
            piece_ctrl,
            original_ctrl,
            piece_start: left_id,
            is_last_piece,
            inside_out: false,
            other_inside_out: true,
            edge_type: EdgeType::Normal,
            in_result: [false; crate::operator::OPERATOR_COUNT],
            sweep_predecessor: None,
            processed: false,
        });
        self.events.push(SweepEvent {
            point: right_point,
            polarity: Polarity::Right,
            twin: left_id,
            input,
            contour_index,
            is_curve,
            piece_ctrl,
            original_ctrl,
            piece_start: left_id,
            is_last_piece,
            inside_out: false,
            other_inside_out: true,
            edge_type: EdgeType::Normal,
            in_result: [false; crate::operator::OPERATOR_COUNT],
            sweep_predecessor: None,
            processed: false,
        });

        (left_id, right_id)
    }
}
