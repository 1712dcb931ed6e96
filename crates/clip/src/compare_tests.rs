use crate::compare::*;
use crate::event::EventPool;
use crate::segment::InputSet;
use core::cmp::Ordering;
use pathclip_geom::Point;

#[test]
fn queue_order_sorts_left_before_right_by_x() {
    let mut pool = EventPool::new();
    let (l, r) = pool.push_pair(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        InputSet::Subject,
        0,
        false,
        None,
        None,
        true,
    );
    assert_eq!(queue_order(&pool, l, r), Ordering::Less);
    assert_eq!(queue_order(&pool, r, l), Ordering::Greater);
}

#[test]
fn sweep_order_picks_lower_edge_at_shared_x() {
    let mut pool = EventPool::new();
    let (low, _) = pool.push_pair(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        InputSet::Subject,
        0,
        false,
        None,
        None,
        true,
    );
    let (high, _) = pool.push_pair(
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        InputSet::Subject,
        0,
        false,
        None,
        None,
        true,
    );
    assert_eq!(sweep_order(&pool, low, high), Ordering::Less);
    assert_eq!(sweep_order(&pool, high, low), Ordering::Greater);
}
