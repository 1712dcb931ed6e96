use crate::point::*;
use core::cmp::Ordering;

#[test]
fn lex_order() {
    let a = Point::new(0.0, 5.0);
    let b = Point::new(1.0, 0.0);
    assert_eq!(a.lex_cmp(&b), Ordering::Less);
    let c = Point::new(0.0, 1.0);
    assert_eq!(a.lex_cmp(&c), Ordering::Less);
}

#[test]
fn area_sign() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let c = Point::new(0.0, 1.0);
    assert!(signed_area(a, b, c) > 0.0);
    assert!(signed_area(a, c, b) < 0.0);
}

#[test]
fn left_of_line_basic() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    assert!(left_of_line(a, b, Point::new(0.5, 1.0)));
    assert!(!left_of_line(a, b, Point::new(0.5, -1.0)));
}
