use crate::line::*;
use crate::point::Point;

#[test]
fn crossing_segments() {
    let a = LineSegment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
    let b = LineSegment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
    let (t, u) = a.intersection_t(&b).unwrap();
    assert!((t - 0.5).abs() < 1e-9);
    assert!((u - 0.5).abs() < 1e-9);
    let p = a.intersection(&b).unwrap();
    assert!(p.approx_eq(Point::new(1.0, 1.0), 1e-9));
}

#[test]
fn parallel_segments_dont_intersect() {
    let a = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    let b = LineSegment::new(Point::new(0.0, 1.0), Point::new(1.0, 1.0));
    assert!(a.intersection_t(&b).is_none());
}

#[test]
fn non_overlapping_segments_dont_intersect() {
    let a = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let b = LineSegment::new(Point::new(5.0, 0.0), Point::new(6.0, 1.0));
    assert!(a.intersection_t(&b).is_none());
}

#[test]
fn touching_at_endpoint() {
    let a = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let b = LineSegment::new(Point::new(1.0, 1.0), Point::new(2.0, 0.0));
    let (t, u) = a.intersection_t(&b).unwrap();
    assert!((t - 1.0).abs() < 1e-9);
    assert!((u - 0.0).abs() < 1e-9);
}

#[test]
fn vertical_segment_bounding_box() {
    let a = LineSegment::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0));
    assert!(a.is_vertical());
    let (min, max) = a.bounding_box();
    assert_eq!(min, Point::new(1.0, 0.0));
    assert_eq!(max, Point::new(1.0, 5.0));
}
