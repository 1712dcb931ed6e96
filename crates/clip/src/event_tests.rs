use crate::event::*;
use crate::segment::InputSet;
use pathclip_geom::Point;

#[test]
fn push_pair_links_twins() {
    let mut pool = EventPool::new();
    let (l, r) = pool.push_pair(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        InputSet::Subject,
        0,
        false,
        None,
        None,
        false,
    );
    assert_eq!(pool.get(l).twin, r);
    assert_eq!(pool.get(r).twin, l);
    assert_eq!(pool.get(l).polarity, Polarity::Left);
    assert_eq!(pool.get(r).polarity, Polarity::Right);
}
