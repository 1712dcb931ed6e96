use crate::cubic::*;
use crate::line::LineSegment;
use crate::point::Point;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn sample_matches_endpoints() {
    let c = CubicBezier::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 1.0), p(3.0, 0.0));
    assert!(c.sample(0.0).approx_eq(c.p0, 1e-12));
    assert!(c.sample(1.0).approx_eq(c.p3, 1e-12));
}

#[test]
fn split_preserves_endpoints_and_midpoint() {
    let c = CubicBezier::new(p(0.0, 0.0), p(1.0, 2.0), p(2.0, 2.0), p(3.0, 0.0));
    let (left, right) = c.split(0.5);
    assert!(left.p0.approx_eq(c.p0, 1e-12));
    assert!(right.p3.approx_eq(c.p3, 1e-12));
    assert!(left.p3.approx_eq(right.p0, 1e-12));
    assert!(left.p3.approx_eq(c.sample(0.5), 1e-9));
}

#[test]
fn sub_bezier_matches_direct_sampling() {
    let c = CubicBezier::new(p(0.0, 0.0), p(1.0, 3.0), p(2.0, -1.0), p(3.0, 0.0));
    let t0 = 0.2;
    let t1 = 0.7;
    let sub = c.sub_bezier(t0, t1).unwrap();
    assert!(sub.p0.approx_eq(c.sample(t0), 1e-9));
    assert!(sub.p3.approx_eq(c.sample(t1), 1e-9));
    // Midpoint of the sub-curve's own parametrization should match the
    // corresponding point on the original curve.
    let mid_t = t0 + 0.5 * (t1 - t0);
    assert!(sub.sample(0.5).approx_eq(c.sample(mid_t), 1e-6));
}

#[test]
fn monotonic_split_of_s_curve_has_one_interior_param() {
    // An S-shaped cubic with one x-extremum in the interior.
    let c = CubicBezier::new(p(0.0, 0.0), p(3.0, 1.0), p(-2.0, 1.0), p(1.0, 0.0));
    let params = c.monotonic_split_params(1e-10);
    assert!(!params.is_empty());
    for &t in params.iter() {
        assert!(t > 0.0 && t < 1.0);
    }
}

#[test]
fn monotonic_cubic_has_no_interior_split() {
    let c = CubicBezier::new(p(0.0, 0.0), p(1.0, 0.5), p(2.0, 1.5), p(3.0, 2.0));
    let params = c.monotonic_split_params(1e-10);
    assert!(params.is_empty());
}

#[test]
fn line_intersects_cubic_at_expected_parameter() {
    // A horizontal line through the middle of a symmetric hump.
    let c = CubicBezier::new(p(0.0, 0.0), p(1.0, 2.0), p(2.0, 2.0), p(3.0, 0.0));
    let seg = LineSegment::new(p(-1.0, 1.0), p(4.0, 1.0));
    let hits = c.line_intersections(&seg, 1e-10, 1e-9);
    assert!(hits.len() >= 2);
    for hit in hits.iter() {
        assert!((hit.point.y - 1.0).abs() < 1e-6);
    }
}

#[test]
fn crossing_cubics_intersect_near_the_middle() {
    let a = CubicBezier::new(p(0.0, 0.0), p(1.0, 3.0), p(2.0, -3.0), p(3.0, 0.0));
    let b = CubicBezier::new(p(0.0, 0.0), p(1.0, -3.0), p(2.0, 3.0), p(3.0, 0.0));
    let hits = a.cubic_intersections(&b, 1e-7);
    assert!(!hits.is_empty());
    for hit in &hits {
        let pa = a.sample(hit.u);
        let pb = b.sample(hit.v);
        assert!(pa.distance_to(pb) < 1e-3);
    }
}

#[test]
fn disjoint_cubics_have_no_intersections() {
    let a = CubicBezier::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 1.0), p(3.0, 0.0));
    let b = CubicBezier::new(p(0.0, 10.0), p(1.0, 11.0), p(2.0, 11.0), p(3.0, 10.0));
    assert!(a.cubic_intersections(&b, 1e-7).is_empty());
}
