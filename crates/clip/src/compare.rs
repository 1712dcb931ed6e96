//! The two comparators the sweep depends on for correctness: the queue
//! order, and the sweep-line order. Both bottom out in `pathclip_geom`'s
//! robust `signed_area`/`left_of_line`.

use core::cmp::Ordering;

use pathclip_geom::{left_of_line, Point};

use crate::event::{EventId, EventPool, Polarity};
use crate::segment::InputSet;

/// Samples an event's curve (or line) at the midpoint of its span, used to
/// break curve-vs-curve ties in both comparators.
fn midpoint(pool: &EventPool, id: EventId) -> Point {
    let e = pool.get(id);
    let twin = pool.get(e.twin);
    let (left_point, right_point) = match e.polarity {
        Polarity::Left => (e.point, twin.point),
        Polarity::Right => (twin.point, e.point),
    };
    match e.piece_ctrl {
        None => Point::new(
            0.5 * (left_point.x + right_point.x),
            0.5 * (left_point.y + right_point.y),
        ),
        Some(ctrl) => {
            let c = pathclip_geom::CubicBezier::new(left_point, ctrl.c1, ctrl.c2, right_point);
            c.sample(0.5)
        }
    }
}

/// The other endpoint of the segment `id`'s edge belongs to.
fn other_endpoint(pool: &EventPool, id: EventId) -> Point {
    pool.get(pool.get(id).twin).point
}

fn fallback_order(pool: &EventPool, a: EventId, b: EventId) -> Ordering {
    let ea = pool.get(a);
    let eb = pool.get(b);
    let ca = ea.piece_ctrl.map(|c| (c.c1, c.c2));
    let cb = eb.piece_ctrl.map(|c| (c.c1, c.c2));
    match (ca, cb) {
        (Some((a1, a2)), Some((b1, b2))) => a1
            .lex_cmp(&b1)
            .then_with(|| a2.lex_cmp(&b2))
            .then_with(|| a.0.cmp(&b.0)),
        _ => a.0.cmp(&b.0),
    }
}

/// Strict weak order for the event queue: primary by
/// `point.x` then `point.y`; right events precede left events at equal
/// points; ties among same-polarity events at the same point resolve by
/// input membership, then by which edge's other endpoint is lower, then by
/// a deterministic control-point fallback.
pub fn queue_order(pool: &EventPool, a: EventId, b: EventId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let ea = pool.get(a);
    let eb = pool.get(b);

    ea.point
        .lex_cmp(&eb.point)
        .then_with(|| match (ea.polarity, eb.polarity) {
            (Polarity::Right, Polarity::Left) => Ordering::Less,
            (Polarity::Left, Polarity::Right) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .then_with(|| match (ea.input, eb.input) {
            (InputSet::Subject, InputSet::Clipping) => Ordering::Less,
            (InputSet::Clipping, InputSet::Subject) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .then_with(|| {
            if ea.is_curve || eb.is_curve {
                let ma = midpoint(pool, a);
                let mb = midpoint(pool, b);
                ma.y.partial_cmp(&mb.y).unwrap_or(Ordering::Equal)
            } else {
                let oa = other_endpoint(pool, a);
                let ob = other_endpoint(pool, b);
                if left_of_line(ea.point, oa, ob) {
                    Ordering::Greater
                } else if left_of_line(ea.point, ob, oa) {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            }
        })
        .then_with(|| fallback_order(pool, a, b))
}

/// Orders two currently-active left events on the sweep-line: which one sits
/// lower at the current sweep position.
///
/// Only meaningful between two left events; callers never compare a right
/// event against the active set (it looks up its twin instead).
pub fn sweep_order(pool: &EventPool, a: EventId, b: EventId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let ea = pool.get(a);
    let eb = pool.get(b);

    if ea.point == eb.point {
        return queue_order(pool, a, b);
    }

    if !ea.is_curve && !eb.is_curve {
        let oa = other_endpoint(pool, a);
        let ob = other_endpoint(pool, b);
        // Whichever edge was inserted with the larger (later) left point is
        // the probe; test it against the other's segment.
        return if ea.point.lex_cmp(&eb.point) == Ordering::Greater {
            if left_of_line(eb.point, ob, ea.point) {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        } else if left_of_line(ea.point, oa, eb.point) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    curve_below_point_order(pool, a, b)
}

/// "Curve below point" comparator: find the y each edge would have at the
/// x of the later-inserted edge's left point, then compare.
fn curve_below_point_order(pool: &EventPool, a: EventId, b: EventId) -> Ordering {
    let ea = pool.get(a);
    let eb = pool.get(b);

    let probe_x = if ea.point.lex_cmp(&eb.point) == Ordering::Greater {
        ea.point.x
    } else {
        eb.point.x
    };

    let y_at = |id: EventId| -> f64 {
        let e = pool.get(id);
        let twin = pool.get(e.twin);
        let (left, right) = match e.polarity {
            Polarity::Left => (e.point, twin.point),
            Polarity::Right => (twin.point, e.point),
        };
        match e.piece_ctrl {
            None => {
                if (right.x - left.x).abs() < 1e-15 {
                    left.y.min(right.y)
                } else {
                    let t = (probe_x - left.x) / (right.x - left.x);
                    left.y + t.clamp(0.0, 1.0) * (right.y - left.y)
                }
            }
            Some(ctrl) => {
                let c = pathclip_geom::CubicBezier::new(left, ctrl.c1, ctrl.c2, right);
                bisect_y_at_x(&c, probe_x)
            }
        }
    };

    y_at(a)
        .partial_cmp(&y_at(b))
        .unwrap_or(Ordering::Equal)
        .then_with(|| fallback_order(pool, a, b))
}

/// Binary-searches a monotonic cubic's parameter for the one whose x matches
/// `target_x`, returning the y there.
fn bisect_y_at_x(c: &pathclip_geom::CubicBezier, target_x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0, 1.0);
    let (x0, x1) = (c.p0.x, c.p3.x);
    if (x1 - x0).abs() < 1e-15 {
        return c.p0.y.min(c.p3.y);
    }
    let increasing = x1 > x0;
    for _ in 0..60 {
        let mid = 0.5 * (lo + hi);
        let x = c.sample(mid).x;
        if (x - target_x).abs() < 1e-13 {
            return c.sample(mid).y;
        }
        if (x < target_x) == increasing {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    c.sample(0.5 * (lo + hi)).y
}
