//! Cubic Bezier subdivision, monotonic splitting, and intersection with
//! lines and other cubics.

use arrayvec::ArrayVec;

use crate::numerics::{diff_of_products, solve_cubic, solve_quadratic};
use crate::point::{signed_area, Point};
use crate::line::LineSegment;

/// A cubic curve given by its four control points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

/// Line-vs-cubic intersection: `t` on the line, `u` on the cubic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineToCubicIntersection {
    pub t: f64,
    pub u: f64,
    pub point: Point,
}

/// Cubic-vs-cubic intersection: `u` on `self`, `v` on `other`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicToCubicIntersection {
    pub u: f64,
    pub v: f64,
    pub point: Point,
}

#[inline]
fn axis(p: Point, d: usize) -> f64 {
    if d == 0 {
        p.x
    } else {
        p.y
    }
}

impl CubicBezier {
    #[inline]
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        CubicBezier { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at `t` via the cubic Bernstein polynomial.
    pub fn sample(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        )
    }

    /// Splits the curve at `t` into two cubics covering `[0, t]` and `[t, 1]`
    /// of the original parameter range. The shared split point is evaluated
    /// directly from the Bernstein form rather than carried over from the de
    /// Casteljau triangle, so both halves agree on it bit-for-bit.
    pub fn split(&self, t: f64) -> (CubicBezier, CubicBezier) {
        let x12 = self.p0.lerp(self.p1, t);
        let x23 = self.p1.lerp(self.p2, t);
        let x34 = self.p2.lerp(self.p3, t);
        let x123 = x12.lerp(x23, t);
        let x234 = x23.lerp(x34, t);

        let split = self.sample(t);

        (
            CubicBezier::new(self.p0, x12, x123, split),
            CubicBezier::new(split, x234, x34, self.p3),
        )
    }

    /// Extracts the sub-curve over `[t, u]` (`0 <= t <= u <= 1`).
    ///
    /// Rather than splitting at `u`, splitting the left part again at a
    /// reparametrized `t`, and hoping the two splits agree, this reconstructs
    /// the inner control points from the ratio of distances produced by
    /// splitting at `t` and at `u` independently. That avoids accumulating
    /// the rounding error of a double reparametrization.
    pub fn sub_bezier(&self, t: f64, u: f64) -> Option<CubicBezier> {
        let (l1, r1) = self.split(t);
        if u == 1.0 {
            return Some(r1);
        }
        let (l2, r2) = self.split(u);
        if t == 0.0 {
            return Some(l2);
        }

        // Degenerates to a quadratic: one pair of control points already
        // collapsed onto the corresponding endpoint.
        if self.p3 == self.p2 || self.p0 == self.p1 {
            let inter = LineSegment::new(r1.p0, r1.p1).intersection_unbounded(&LineSegment::new(l2.p2, l2.p3))?;
            let p1 = r1.p0.lerp(inter, 2.0 / 3.0);
            let p2 = inter.lerp(l2.p3, 1.0 / 3.0);
            return Some(CubicBezier::new(r1.p0, p1, p2, l2.p3));
        }

        let d = r2.p0.distance_to(r2.p1);
        let rx = r1.p2.x - r2.p2.x;
        let ry = r1.p2.y - r2.p2.y;
        let ratio = if rx.abs() > ry.abs() {
            (r2.p2.x - r2.p3.x) / rx
        } else {
            (r2.p2.y - r2.p3.y) / ry
        };

        if !ratio.is_finite() || ratio == 0.0 {
            return None;
        }

        let right_dist = d / ratio;
        let p1 = Point::new(
            (r1.p1.x + ratio * r1.p0.x) / (ratio + 1.0),
            (r1.p1.y + ratio * r1.p0.y) / (ratio + 1.0),
        );
        let p2 = scale_towards(l2.p3, l2.p2, right_dist);

        Some(CubicBezier::new(l1.p3, p1, p2, r2.p0))
    }

    /// Signed area of the control polygon (`p0, p1, p2, p3`); its sign gives
    /// the curve's orientation when the endpoints alone don't (e.g. a cusp).
    pub fn control_polygon_area(&self) -> f64 {
        signed_area(self.p0, self.p1, self.p2) + signed_area(self.p0, self.p2, self.p3)
    }

    /// `true` when the curve runs in its "increasing" direction (positive
    /// control-polygon area), falling back to endpoint lexicographic order
    /// when the control polygon has zero area (all points collinear).
    pub fn is_increasing(&self) -> bool {
        let area = self.control_polygon_area();
        if area == 0.0 {
            self.p0.lex_cmp(&self.p3) == core::cmp::Ordering::Less
        } else {
            area > 0.0
        }
    }

    pub fn reverse(&self) -> CubicBezier {
        CubicBezier::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Axis-aligned bounding box of the control points (a superset of the
    /// true curve bounds, cheap to compute, good enough for the sweep's
    /// broad-phase rejection tests).
    pub fn control_bounding_box(&self) -> (Point, Point) {
        let min_x = self.p0.x.min(self.p1.x).min(self.p2.x).min(self.p3.x);
        let min_y = self.p0.y.min(self.p1.y).min(self.p2.y).min(self.p3.y);
        let max_x = self.p0.x.max(self.p1.x).max(self.p2.x).max(self.p3.x);
        let max_y = self.p0.y.max(self.p1.y).max(self.p2.y).max(self.p3.y);
        (Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Tight bounding box, computed from the endpoints plus any interior
    /// extrema (zeros of the derivative) in each axis.
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min = Point::new(self.p0.x.min(self.p3.x), self.p0.y.min(self.p3.y));
        let mut max = Point::new(self.p0.x.max(self.p3.x), self.p0.y.max(self.p3.y));
        for d in 0..2 {
            for t in extrema(self, d) {
                let p = self.sample(t);
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
            }
        }
        (min, max)
    }

    /// Splits the curve into at most 5 pieces, each weakly monotonic in both
    /// `x` and `y`. Returns only the interior split parameters, in
    /// ascending order (never `0` or `1`).
    pub fn monotonic_split_params(&self, abstol: f64) -> ArrayVec<f64, 4> {
        let mut params = ArrayVec::<f64, 4>::new();

        let (min, max) = (
            Point::new(self.p0.x.min(self.p3.x), self.p0.y.min(self.p3.y)),
            Point::new(self.p0.x.max(self.p3.x), self.p0.y.max(self.p3.y)),
        );
        let p1_inside = in_box(min, max, self.p1) || self.p0 == self.p1;
        let p2_inside = in_box(min, max, self.p2) || self.p3 == self.p2;
        if p1_inside && p2_inside {
            return params;
        }

        let mut all: ArrayVec<f64, 4> = ArrayVec::new();
        for d in 0..2 {
            for t in extrema(self, d) {
                if t > abstol && t + abstol < 1.0 {
                    all.push(t);
                }
            }
        }
        all.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for t in all {
            params.push(t);
        }
        params
    }

    /// Splits the curve into at most 5 weakly-monotonic pieces.
    pub fn monotonic_pieces(&self, abstol: f64) -> ArrayVec<CubicBezier, 5> {
        let params = self.monotonic_split_params(abstol);
        let mut pieces = ArrayVec::<CubicBezier, 5>::new();
        let mut remaining = *self;
        let mut last_t = 0.0;
        for &t in params.iter() {
            // `t` is a parameter of the original curve; re-derive its
            // position on `remaining`, which starts at `last_t`.
            let local_t = (t - last_t) / (1.0 - last_t);
            let (left, right) = remaining.split(local_t);
            pieces.push(left);
            remaining = right;
            last_t = t;
        }
        pieces.push(remaining);
        pieces
    }

    /// Intersections with a line segment, each giving the segment parameter
    /// `t` and the curve parameter `u`.
    pub fn line_intersections(
        &self,
        seg: &LineSegment,
        abstol: f64,
        cubic_tol: f64,
    ) -> ArrayVec<LineToCubicIntersection, 3> {
        let mut out = ArrayVec::new();

        let (box_min, box_max) = self.control_bounding_box();
        let (seg_min, seg_max) = seg.bounding_box();
        if seg_max.x < box_min.x || box_max.x < seg_min.x || seg_max.y < box_min.y || box_max.y < seg_min.y {
            return out;
        }

        let seg_reversed = seg.from.lex_cmp(&seg.to) != core::cmp::Ordering::Less;
        let seg2 = if seg_reversed {
            seg.reverse()
        } else {
            *seg
        };
        let bezier_reversed = !self.is_increasing();
        let c2 = if bezier_reversed {
            self.reverse()
        } else {
            *self
        };

        for hit in line_bezier_inter_impl(&seg2, &c2, abstol, cubic_tol) {
            let t = if seg_reversed { 1.0 - hit.t } else { hit.t };
            let u = if bezier_reversed { 1.0 - hit.u } else { hit.u };
            let _ = out.try_push(LineToCubicIntersection { t, u, point: hit.point });
        }
        out
    }

    /// Intersections with another cubic, found by recursively subdividing
    /// both curves' bounding boxes until they're small enough to treat as
    /// (nearly) straight and resolve with a line-line intersection.
    ///
    /// This replaces the closed-form implicitization route: building the
    /// degree-9 resultant polynomial in closed form requires machine-derived
    /// algebra that can't be hand-verified here with any confidence, while
    /// recursive subdivision is self-checking (it bottoms out at an explicit
    /// tolerance) and gives the same intersections.
    pub fn cubic_intersections(
        &self,
        other: &CubicBezier,
        tol: f64,
    ) -> Vec<CubicToCubicIntersection> {
        let mut out = Vec::new();
        subdivide_intersect(self, 0.0, 1.0, other, 0.0, 1.0, tol, 0, &mut out);
        dedup_intersections(&mut out, tol);
        out
    }
}

fn scale_towards(from: Point, to: Point, scale: f64) -> Point {
    let d = from.distance_to(to);
    if d == 0.0 {
        return from;
    }
    let vx = to.x - from.x;
    let vy = to.y - from.y;
    Point::new(scale / d * vx + from.x, scale / d * vy + from.y)
}

fn in_box(min: Point, max: Point, p: Point) -> bool {
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

/// Roots of the quadratic derivative of axis `d` (`0` = x, `1` = y),
/// filtered to the open interval `(0, 1)`.
fn extrema(c: &CubicBezier, d: usize) -> ArrayVec<f64, 2> {
    let p0 = axis(c.p0, d);
    let p1 = axis(c.p1, d);
    let p2 = axis(c.p2, d);
    let p3 = axis(c.p3, d);

    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let cc = p1 - p0;

    let mut out = ArrayVec::new();
    for t in solve_quadratic(cc, b, a) {
        if t > 0.0 && t < 1.0 {
            out.push(t);
        }
    }
    out
}

trait LineExt {
    fn intersection_unbounded(&self, other: &LineSegment) -> Option<Point>;
}

impl LineExt for LineSegment {
    /// Intersection of the two *infinite* lines through `self` and `other`,
    /// used by [`CubicBezier::sub_bezier`]'s quadratic-degenerate case where
    /// the intersecting rays aren't guaranteed to land within either segment.
    fn intersection_unbounded(&self, other: &LineSegment) -> Option<Point> {
        let (v1x, v1y) = self.to.sub(self.from);
        let (v2x, v2y) = other.to.sub(other.from);
        let (v3x, v3y) = other.from.sub(self.from);

        let denom = diff_of_products(v1x, v2y, v1y, v2x);
        if denom == 0.0 {
            return None;
        }
        let t = diff_of_products(v3x, v2y, v3y, v2x) / denom;
        Some(self.sample(t))
    }
}

struct LineBezierHit {
    t: f64,
    u: f64,
    point: Point,
}

/// Rotates the curve so the segment lies on the positive x-axis, solves for
/// the curve's x(t)=0 crossings, then filters to those whose mapped point
/// actually lands within the (un-rotated) segment's span.
fn line_bezier_inter_impl(
    seg: &LineSegment,
    c: &CubicBezier,
    abstol: f64,
    cubic_tol: f64,
) -> ArrayVec<LineBezierHit, 3> {
    let mut out = ArrayVec::new();

    let (cos_val, sin_val) = axis_align_rotation(seg.from, seg.to, abstol);
    let rotate = |p: Point| -> Point {
        let offx = p.x - seg.from.x;
        let offy = p.y - seg.from.y;
        Point::new(offx * cos_val - offy * sin_val, offx * sin_val + offy * cos_val)
    };

    let q0 = rotate(c.p0);
    let q1 = rotate(c.p1);
    let q2 = rotate(c.p2);
    let q3 = rotate(c.p3);

    // Coefficients of the rotated curve's y(t), ascending degree.
    let a0 = q0.y;
    let a1 = -3.0 * q0.y + 3.0 * q1.y;
    let a2 = 3.0 * q0.y - 6.0 * q1.y + 3.0 * q2.y;
    let a3 = -q0.y + 3.0 * q1.y - 3.0 * q2.y + q3.y;

    let mut roots: ArrayVec<f64, 3> = ArrayVec::new();
    solve_cubic(
        a0,
        a1,
        a2,
        a3,
        |r| {
            if roots.is_full() {
                return;
            }
            let snapped = if r.abs() < abstol {
                0.0
            } else if (r - 1.0).abs() < abstol {
                1.0
            } else {
                r
            };
            if (0.0..=1.0).contains(&snapped) {
                let _ = roots.try_push(snapped);
            }
        },
        cubic_tol,
    );

    let (seg_min, seg_max) = seg.bounding_box();
    for &u in roots.iter() {
        let point = c.sample(u);
        if in_box_special(seg, seg_min, seg_max, point) {
            let t = if seg.is_vertical() {
                seg.solve_t_for_y(point.y)
            } else {
                seg.solve_t_for_x(point.x)
            };
            let _ = out.try_push(LineBezierHit { t, u, point });
        }
    }
    out
}

fn axis_align_rotation(from: Point, to: Point, abstol: f64) -> (f64, f64) {
    if (from.y - to.y).abs() < abstol {
        return (1.0, 0.0);
    }
    let vx = to.x - from.x;
    let vy = to.y - from.y;
    if vx.abs() < abstol {
        return (0.0, if vy > 0.0 { -1.0 } else { 1.0 });
    }
    let d = -vy / vx;
    let cos_val = 1.0 / (1.0 + d * d).sqrt();
    let sin_val = d * cos_val;
    (cos_val, sin_val)
}

fn in_box_special(seg: &LineSegment, seg_min: Point, seg_max: Point, p: Point) -> bool {
    let x_ok = p.x >= seg_min.x && p.x <= seg_max.x;
    let y_ok = p.y >= seg_min.y && p.y <= seg_max.y;
    (x_ok && y_ok) || (seg.is_vertical() && y_ok) || (seg.is_horizontal() && x_ok)
}

const MAX_SUBDIVISION_DEPTH: u32 = 32;

#[allow(clippy::too_many_arguments)]
fn subdivide_intersect(
    a: &CubicBezier,
    a_t0: f64,
    a_t1: f64,
    b: &CubicBezier,
    b_t0: f64,
    b_t1: f64,
    tol: f64,
    depth: u32,
    out: &mut Vec<CubicToCubicIntersection>,
) {
    let (a_min, a_max) = a.control_bounding_box();
    let (b_min, b_max) = b.control_bounding_box();
    if a_max.x < b_min.x || b_max.x < a_min.x || a_max.y < b_min.y || b_max.y < a_min.y {
        return;
    }

    let a_flat = is_near_linear(a, tol);
    let b_flat = is_near_linear(b, tol);

    if depth >= MAX_SUBDIVISION_DEPTH || (a_flat && b_flat) {
        if let Some((u, v, point)) =
            LineSegment::new(a.p0, a.p3).intersection_t(&LineSegment::new(b.p0, b.p3)).map(|(u, v)| {
                (u, v, LineSegment::new(a.p0, a.p3).sample(u))
            })
        {
            out.push(CubicToCubicIntersection {
                u: a_t0 + u * (a_t1 - a_t0),
                v: b_t0 + v * (b_t1 - b_t0),
                point,
            });
        }
        return;
    }

    if !a_flat {
        let a_mid_t = 0.5;
        let (a_left, a_right) = a.split(a_mid_t);
        let a_mid = a_t0 + a_mid_t * (a_t1 - a_t0);
        if !b_flat {
            let (b_left, b_right) = b.split(0.5);
            let b_mid = b_t0 + 0.5 * (b_t1 - b_t0);
            subdivide_intersect(&a_left, a_t0, a_mid, &b_left, b_t0, b_mid, tol, depth + 1, out);
            subdivide_intersect(&a_left, a_t0, a_mid, &b_right, b_mid, b_t1, tol, depth + 1, out);
            subdivide_intersect(&a_right, a_mid, a_t1, &b_left, b_t0, b_mid, tol, depth + 1, out);
            subdivide_intersect(&a_right, a_mid, a_t1, &b_right, b_mid, b_t1, tol, depth + 1, out);
        } else {
            subdivide_intersect(&a_left, a_t0, a_mid, b, b_t0, b_t1, tol, depth + 1, out);
            subdivide_intersect(&a_right, a_mid, a_t1, b, b_t0, b_t1, tol, depth + 1, out);
        }
    } else {
        let (b_left, b_right) = b.split(0.5);
        let b_mid = b_t0 + 0.5 * (b_t1 - b_t0);
        subdivide_intersect(a, a_t0, a_t1, &b_left, b_t0, b_mid, tol, depth + 1, out);
        subdivide_intersect(a, a_t0, a_t1, &b_right, b_mid, b_t1, tol, depth + 1, out);
    }
}

/// A curve is "near linear" when its control points sit close to the chord
/// through its endpoints, measured as the max perpendicular distance.
fn is_near_linear(c: &CubicBezier, tol: f64) -> bool {
    let len = c.p0.distance_to(c.p3);
    if len < tol {
        return true;
    }
    let dx = c.p3.x - c.p0.x;
    let dy = c.p3.y - c.p0.y;
    let dist = |p: Point| (diff_of_products(p.x - c.p0.x, dy, p.y - c.p0.y, dx)).abs() / len;
    dist(c.p1) < tol && dist(c.p2) < tol
}

fn dedup_intersections(hits: &mut Vec<CubicToCubicIntersection>, tol: f64) {
    hits.sort_by(|a, b| a.u.partial_cmp(&b.u).unwrap());
    hits.dedup_by(|a, b| (a.u - b.u).abs() < tol && (a.v - b.v).abs() < tol);
}
