//! Post-processing pass over connector output: split a
//! contour at any repeated vertex into independent sub-contours, and
//! optionally fold consecutive collinear line components into one.

use pathclip_geom::Point;
use pathclip_path::{Component, Contour};

/// Splits every contour in `contours` at repeated vertices. A contour that
/// revisits a point it already passed through (other than closing back on
/// its own start) is really two (or more) simple contours glued at that
/// point; this separates them.
pub fn split_repeated_vertices(contours: Vec<Contour>, tol: f64) -> Vec<Contour> {
    let mut out = Vec::new();
    for contour in contours {
        out.extend(split_one(contour, tol));
    }
    out
}

fn split_one(contour: Contour, tol: f64) -> Vec<Contour> {
    let vertices: Vec<Point> = {
        let mut v = vec![contour.start];
        v.extend(contour.components.iter().map(|c| c.endpoint()));
        v
    };

    let mut seen_at: Vec<(Point, usize)> = Vec::new();
    let mut skip = vec![false; contour.components.len()];
    let mut sub_contours = Vec::new();

    let mut i = 0usize;
    while i < vertices.len() {
        let p = vertices[i];
        if let Some(&(_, prev)) = seen_at.iter().find(|&&(q, _)| q.approx_eq(p, tol)) {
            // [prev, i) is a closed loop of components prev..i.
            if i > prev {
                let start = vertices[prev];
                let mut sub = Contour::new(start);
                for idx in prev..i {
                    push_component(&mut sub, &contour.components[idx]);
                    skip[idx] = true;
                }
                sub_contours.push(sub);
            }
            seen_at.retain(|&(q, _)| !q.approx_eq(p, tol));
        }
        seen_at.push((p, i));
        i += 1;
    }

    if skip.iter().all(|&s| s) {
        return sub_contours;
    }

    // Whatever components weren't absorbed into a repeated-vertex loop form
    // the remaining (possibly already-simple) contour, in original order.
    let mut remaining = Contour::new(contour.start);
    let mut remaining_has_any = false;
    for (idx, component) in contour.components.iter().enumerate() {
        if !skip[idx] {
            push_component(&mut remaining, component);
            remaining_has_any = true;
        }
    }
    if remaining_has_any {
        sub_contours.push(remaining);
    }

    if sub_contours.is_empty() {
        sub_contours.push(contour);
    }

    sub_contours
}

fn push_component(contour: &mut Contour, component: &Component) {
    match *component {
        Component::LineTo(to) => contour.line_to(to),
        Component::CubicTo { c1, c2, to } => contour.cubic_to(c1, c2, to),
    }
}

/// Folds consecutive line components that are collinear (within `tol`) into
/// a single line component. Curve components are never folded.
pub fn fold_collinear(contour: &Contour, tol: f64) -> Contour {
    let mut folded = Contour::new(contour.start);
    let mut prev_point = contour.start;
    let mut run_start: Option<Point> = None;

    for component in &contour.components {
        match *component {
            Component::LineTo(to) => {
                if let Some(start) = run_start {
                    if collinear(start, prev_point, to, tol) {
                        prev_point = to;
                        continue;
                    }
                    folded.line_to(prev_point);
                }
                run_start = Some(prev_point);
                prev_point = to;
            }
            Component::CubicTo { c1, c2, to } => {
                if let Some(start) = run_start.take() {
                    if start != prev_point {
                        folded.line_to(prev_point);
                    }
                }
                folded.cubic_to(c1, c2, to);
                prev_point = to;
            }
        }
    }
    if let Some(start) = run_start {
        if start != prev_point {
            folded.line_to(prev_point);
        }
    }
    folded
}

fn collinear(a: Point, b: Point, c: Point, tol: f64) -> bool {
    pathclip_geom::signed_area(a, b, c).abs() < tol
}
