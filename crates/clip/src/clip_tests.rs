use crate::clip::*;
use crate::config::Config;
use crate::operator::BooleanOp;
use pathclip_geom::Point;
use pathclip_path::Contour;

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour {
    let mut c = Contour::new(Point::new(x0, y0));
    c.line_to(Point::new(x1, y0));
    c.line_to(Point::new(x1, y1));
    c.line_to(Point::new(x0, y1));
    c.line_to(Point::new(x0, y0));
    c
}

#[test]
fn union_of_overlapping_squares_has_area_seven() {
    let a = square(0.0, 0.0, 2.0, 2.0);
    let b = square(1.0, 1.0, 3.0, 3.0);
    let config = Config::default();
    let result = clip(&[a], &[b], BooleanOp::Union, &config).unwrap();
    let total: f64 = result.iter().map(|c| c.signed_area().abs()).sum();
    assert!((total - 7.0).abs() < 1e-6);
}

#[test]
fn intersection_of_overlapping_squares_has_area_one() {
    let a = square(0.0, 0.0, 2.0, 2.0);
    let b = square(1.0, 1.0, 3.0, 3.0);
    let config = Config::default();
    let result = clip(&[a], &[b], BooleanOp::Intersection, &config).unwrap();
    let total: f64 = result.iter().map(|c| c.signed_area().abs()).sum();
    assert!((total - 1.0).abs() < 1e-6);
}

#[test]
fn disjoint_squares_difference_returns_subject_unchanged() {
    let a = square(0.0, 0.0, 1.0, 1.0);
    let b = square(5.0, 5.0, 6.0, 6.0);
    let config = Config::default();
    let result = clip(&[a], &[b], BooleanOp::Difference, &config).unwrap();
    let total: f64 = result.iter().map(|c| c.signed_area().abs()).sum();
    assert!((total - 1.0).abs() < 1e-6);
}

#[test]
fn nested_squares_difference_has_two_contours_with_a_hole() {
    let outer = square(0.0, 0.0, 4.0, 4.0);
    let inner = square(1.0, 1.0, 3.0, 3.0);
    let config = Config::default();
    let result = clip(&[outer], &[inner], BooleanOp::Difference, &config).unwrap();
    assert_eq!(result.len(), 2);
    let net_area: f64 = result.iter().map(|c| c.signed_area()).sum();
    assert!((net_area.abs() - 12.0).abs() < 1e-6);
}

#[test]
fn divide_partitions_cover_the_union_area() {
    let a = square(0.0, 0.0, 2.0, 2.0);
    let b = square(1.0, 1.0, 3.0, 3.0);
    let config = Config::default();
    let parts = clip(&[a.clone()], &[b.clone()], BooleanOp::Divide, &config).unwrap();
    let union = clip(&[a], &[b], BooleanOp::Union, &config).unwrap();
    let parts_area: f64 = parts.iter().map(|c| c.signed_area().abs()).sum();
    let union_area: f64 = union.iter().map(|c| c.signed_area().abs()).sum();
    assert!((parts_area - union_area).abs() < 1e-6);
}

#[test]
fn touching_squares_share_an_edge_without_spurious_area() {
    let a = square(0.0, 0.0, 1.0, 1.0);
    let b = square(1.0, 0.0, 2.0, 1.0);
    let config = Config::default();
    let result = clip(&[a], &[b], BooleanOp::Union, &config).unwrap();
    let total: f64 = result.iter().map(|c| c.signed_area().abs()).sum();
    assert!((total - 2.0).abs() < 1e-6);
}

/// A square with its top edge replaced by a tall cubic bulge, clipped
/// against a horizontal band that crosses the bulge twice but misses the
/// square's corners entirely -- exercises line/cubic and the full
/// segment/breakpoint/queue/sweep/connect pipeline on a genuinely curved
/// contour rather than only straight edges.
#[test]
fn cubic_bulge_intersected_with_a_crossing_band() {
    let mut bulge = Contour::new(Point::new(0.0, 0.0));
    bulge.line_to(Point::new(2.0, 0.0));
    bulge.line_to(Point::new(2.0, 1.0));
    bulge.cubic_to(Point::new(2.0, 4.0), Point::new(0.0, 4.0), Point::new(0.0, 1.0));
    bulge.line_to(Point::new(0.0, 0.0));

    let band = square(0.0, 1.5, 2.0, 2.5);
    let config = Config::default();

    let intersection = clip(&[bulge.clone()], &[band.clone()], BooleanOp::Intersection, &config).unwrap();
    assert!(!intersection.is_empty());
    let inter_area: f64 = intersection.iter().map(|c| c.signed_area().abs()).sum();
    // The band's corners near x=0 and x=2 sit below the bulge at those x
    // values, so the intersection is a proper subset of the band.
    assert!(inter_area > 0.0);
    assert!(inter_area < 2.0);

    let union = clip(&[bulge], &[band], BooleanOp::Union, &config).unwrap();
    assert!(!union.is_empty());
    for c in &union {
        assert!(c.is_closed(1e-6));
    }
}
