use crate::contour::Contour;
use crate::wire::*;
use ciborium::value::Value;
use pathclip_geom::Point;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn unit_square() -> Contour {
    let mut c = Contour::new(p(0.0, 0.0));
    c.line_to(p(1.0, 0.0));
    c.line_to(p(1.0, 1.0));
    c.line_to(p(0.0, 1.0));
    c.line_to(p(0.0, 0.0));
    c
}

#[test]
fn round_trips_a_polygon() {
    let contours = vec![unit_square()];
    let bytes = encode_contours(&contours);
    let decoded = decode_contours(&bytes).unwrap();
    assert_eq!(decoded, contours);
}

#[test]
fn round_trips_line_and_cubic_mix() {
    let mut c = Contour::new(p(0.0, 0.0));
    c.line_to(p(1.0, 0.0));
    c.cubic_to(p(1.5, 1.0), p(0.5, 1.0), p(0.0, 0.0));
    let contours = vec![c];
    let bytes = encode_contours(&contours);
    let decoded = decode_contours(&bytes).unwrap();
    assert_eq!(decoded, contours);
}

#[test]
fn rejects_unknown_segment_tag() {
    let value = Value::Array(vec![Value::Array(vec![Value::Array(vec![Value::Text(
        "triangle".into(),
    )])])]);
    let mut buf = Vec::new();
    ciborium::ser::into_writer(&value, &mut buf).unwrap();
    assert!(decode_contours(&buf).is_err());
}

#[test]
fn empty_contour_list_round_trips() {
    let contours: Vec<Contour> = Vec::new();
    let bytes = encode_contours(&contours);
    let decoded = decode_contours(&bytes).unwrap();
    assert!(decoded.is_empty());
}
