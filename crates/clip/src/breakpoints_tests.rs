use crate::breakpoints::*;
use crate::config::Config;
use crate::segment::{build_segment_table, InputSet, SegmentId};
use pathclip_geom::Point;
use pathclip_path::Contour;

#[test]
fn crossing_squares_produce_interior_breakpoints() {
    let mut a = Contour::new(Point::new(0.0, 0.0));
    a.line_to(Point::new(2.0, 0.0));
    a.line_to(Point::new(2.0, 2.0));
    a.line_to(Point::new(0.0, 2.0));
    a.line_to(Point::new(0.0, 0.0));

    let mut b = Contour::new(Point::new(1.0, 1.0));
    b.line_to(Point::new(3.0, 1.0));
    b.line_to(Point::new(3.0, 3.0));
    b.line_to(Point::new(1.0, 3.0));
    b.line_to(Point::new(1.0, 1.0));

    let table = build_segment_table(&[a], &[b]);
    let config = Config::default();
    let breakpoints = collect_breakpoints(&table, &config);

    let subject_right_edge = breakpoints
        .get(&SegmentId { input: InputSet::Subject, index: 1 })
        .unwrap();
    // The right edge of the subject square (x=2, y 0..2) should pick up
    // an interior crossing from the mask's bottom edge.
    assert!(subject_right_edge.iter().any(|&t| t > 0.0 && t < 1.0));
}

#[test]
fn disjoint_squares_have_only_endpoint_breakpoints() {
    let mut a = Contour::new(Point::new(0.0, 0.0));
    a.line_to(Point::new(1.0, 0.0));
    a.line_to(Point::new(1.0, 1.0));
    a.line_to(Point::new(0.0, 1.0));
    a.line_to(Point::new(0.0, 0.0));

    let mut b = Contour::new(Point::new(5.0, 5.0));
    b.line_to(Point::new(6.0, 5.0));
    b.line_to(Point::new(6.0, 6.0));
    b.line_to(Point::new(5.0, 6.0));
    b.line_to(Point::new(5.0, 5.0));

    let table = build_segment_table(&[a], &[b]);
    let config = Config::default();
    let breakpoints = collect_breakpoints(&table, &config);
    for ts in breakpoints.values() {
        assert_eq!(ts.as_slice(), &[0.0, 1.0]);
    }
}
