//! Stitches selected sweep events back into closed contours.
//!
//! Depth/orientation deviates from the spec's literal `prev_in_result`
//! predecessor chain: rather than threading a "nearest result edge below in
//! sweep order" pointer through the executor, this walks the already-built
//! contours and counts, for each one, how many of the *other* result
//! contours contain one of its vertices (even-odd ray casting over each
//! contour's endpoint polygon). The count is the nesting depth. This is
//! quadratic in contour count rather than the sweep's near-linear
//! bookkeeping, but boolean-clip outputs rarely have more than a handful of
//! contours, and it needs no extra state threaded through the sweep.

use std::collections::HashMap;

use pathclip_geom::Point;
use pathclip_path::{Component, Contour};

use crate::config::Config;
use crate::event::{CurveControl, EventId, EventPool, Polarity};
use crate::operator::Operator;

type VertexKey = (i64, i64);

fn quantize(p: Point, tol: f64) -> VertexKey {
    let scale = 1.0 / tol;
    ((p.x * scale).round() as i64, (p.y * scale).round() as i64)
}

/// Collects the selected (`in_result[op]`) events into closed contours.
pub fn connect(
    pool: &EventPool,
    sorted: &[EventId],
    op: Operator,
    config: &Config,
) -> Result<Vec<Contour>, crate::error::ClipError> {
    let tol = config.approx_equal_tolerance;
    let selected: Vec<EventId> = sorted
        .iter()
        .copied()
        .filter(|&id| pool.get(id).in_result[op.index()])
        .collect();

    let mut incidence: HashMap<VertexKey, Vec<EventId>> = HashMap::new();
    for &id in &selected {
        incidence.entry(quantize(pool.get(id).point, tol)).or_default().push(id);
    }

    let mut processed: std::collections::HashSet<EventId> = std::collections::HashSet::new();
    let mut contours = Vec::new();

    for &start in selected.iter().filter(|&&id| pool.get(id).polarity == Polarity::Left) {
        if processed.contains(&start) {
            continue;
        }

        let start_point = pool.get(start).point;
        let mut contour = Contour::new(start_point);
        let mut hop = start;
        let mut from = start_point;

        loop {
            let e = pool.get(hop);
            processed.insert(hop);
            processed.insert(e.twin);
            let twin_point = pool.get(e.twin).point;

            let ctrl = e.piece_ctrl.map(|c| match e.polarity {
                Polarity::Left => c,
                Polarity::Right => CurveControl { c1: c.c2, c2: c.c1 },
            });

            match ctrl {
                Some(c) => contour.cubic_to(c.c1, c.c2, twin_point),
                None => contour.line_to(twin_point),
            }

            from = twin_point;
            if from.approx_eq(start_point, tol) {
                break;
            }

            let next = incidence
                .get(&quantize(from, tol))
                .into_iter()
                .flatten()
                .find(|&&candidate| !processed.contains(&candidate))
                .copied()
                .ok_or(crate::error::ClipError::MissingConnectorHop)?;

            hop = next;
        }

        contours.push(contour);
    }

    orient_by_depth(&mut contours);
    Ok(contours)
}

fn polygon_vertices(contour: &Contour) -> Vec<Point> {
    let mut pts = vec![contour.start];
    for c in &contour.components {
        pts.push(c.endpoint());
    }
    pts
}

/// Even-odd ray-casting point-in-polygon test against a contour's endpoint
/// polygon (an approximation for curved contours, exact for line-only ones).
fn contains_point(polygon: &[Point], p: Point) -> bool {
    let mut inside = false;
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_at_y = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_at_y {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn orient_by_depth(contours: &mut [Contour]) {
    let polygons: Vec<Vec<Point>> = contours.iter().map(polygon_vertices).collect();
    let depths: Vec<usize> = (0..contours.len())
        .map(|i| {
            let probe = polygons[i][0];
            (0..contours.len())
                .filter(|&j| j != i && contains_point(&polygons[j], probe))
                .count()
        })
        .collect();

    for (contour, depth) in contours.iter_mut().zip(depths) {
        let area = contour.signed_area();
        let want_ccw = depth % 2 == 0;
        if want_ccw != (area > 0.0) {
            contour.reverse();
        }
    }
}

/// A contour is a straight-line degenerate cubic-free polygon when every
/// component is a line; used by post-processing's collinear fold.
pub fn is_line_only(contour: &Contour) -> bool {
    contour.components.iter().all(|c| !matches!(c, Component::CubicTo { .. }))
}
