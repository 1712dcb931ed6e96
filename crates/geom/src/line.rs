use crate::numerics::diff_of_products;
use crate::point::Point;

/// A straight segment between two distinct points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        LineSegment { from, to }
    }

    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    pub fn solve_t_for_x(&self, x: f64) -> f64 {
        let dx = self.to.x - self.from.x;
        if dx == 0.0 {
            return 0.0;
        }
        (x - self.from.x) / dx
    }

    pub fn solve_t_for_y(&self, y: f64) -> f64 {
        let dy = self.to.y - self.from.y;
        if dy == 0.0 {
            return 0.0;
        }
        (y - self.from.y) / dy
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    pub fn bounding_box(&self) -> (Point, Point) {
        let min = Point::new(self.from.x.min(self.to.x), self.from.y.min(self.to.y));
        let max = Point::new(self.from.x.max(self.to.x), self.from.y.max(self.to.y));
        (min, max)
    }

    /// Intersection of two segments, returning `(t, u)` parameters on
    /// `self` and `other` respectively, when the segments actually cross
    /// (or touch) within their bounds. Uses the same "defer the division"
    /// trick as `lyon_geom::LineSegment::intersection_t`: both cross
    /// products are computed with the same sign before dividing, so a
    /// near-parallel pair doesn't blow up the comparison against the
    /// bounds before the division happens.
    pub fn intersection_t(&self, other: &LineSegment) -> Option<(f64, f64)> {
        let (v1x, v1y) = self.to.sub(self.from);
        let (v2x, v2y) = other.to.sub(other.from);
        let (v3x, v3y) = other.from.sub(self.from);

        let v1_cross_v2 = diff_of_products(v1x, v2y, v1y, v2x);
        if v1_cross_v2 == 0.0 {
            return None;
        }

        let sign = v1_cross_v2.signum();
        let abs_cross = v1_cross_v2.abs();

        let t = diff_of_products(v3x, v2y, v3y, v2x) * sign;
        let u = diff_of_products(v3x, v1y, v3y, v1x) * sign;

        if t < 0.0 || t > abs_cross || u < 0.0 || u > abs_cross {
            return None;
        }

        Some((t / abs_cross, u / abs_cross))
    }

    pub fn intersection(&self, other: &LineSegment) -> Option<Point> {
        self.intersection_t(other).map(|(t, _)| self.sample(t))
    }

    pub fn reverse(&self) -> LineSegment {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }
}
