//! Intersection collector: cross-products every segment of both inputs
//! against every other segment and records the parameter values where
//! something interesting happens, per segment.

use std::collections::HashMap;

use pathclip_geom::{LineSegment, Point};

use crate::config::Config;
use crate::segment::{RawSegment, SegmentGeometry, SegmentId, SegmentTable};

/// Per-segment sorted, deduplicated parameter values at which that segment
/// must be cut: always includes `0.0` and `1.0`, plus every `t` where it
/// crosses another segment.
pub type BreakpointTable = HashMap<SegmentId, Vec<f64>>;

pub fn collect_breakpoints(table: &SegmentTable, config: &Config) -> BreakpointTable {
    let all: Vec<(SegmentId, &RawSegment)> = table.iter().collect();
    let mut params: BreakpointTable = HashMap::new();
    for (id, _) in &all {
        params.insert(*id, vec![0.0, 1.0]);
    }

    for i in 0..all.len() {
        for j in (i + 1)..all.len() {
            let (id_a, seg_a) = all[i];
            let (id_b, seg_b) = all[j];
            intersect_pair(seg_a, seg_b, config, |ta, tb| {
                params.get_mut(&id_a).unwrap().push(ta);
                params.get_mut(&id_b).unwrap().push(tb);
            });
        }
    }

    for ts in params.values_mut() {
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ts.dedup_by(|a, b| (*a - *b).abs() < config.approx_equal_tolerance);
    }

    params
}

fn intersect_pair(a: &RawSegment, b: &RawSegment, config: &Config, mut emit: impl FnMut(f64, f64)) {
    match (&a.geometry, &b.geometry) {
        (SegmentGeometry::Line(l1), SegmentGeometry::Line(l2)) => {
            if let Some((t, u)) = l1.intersection_t(l2) {
                emit(t, u);
            }
        }
        (SegmentGeometry::Line(l), SegmentGeometry::Cubic(c)) => {
            for hit in c.line_intersections(l, 1e-10, config.cubic_solver_tolerance) {
                emit(hit.t, hit.u);
            }
        }
        (SegmentGeometry::Cubic(c), SegmentGeometry::Line(l)) => {
            for hit in c.line_intersections(l, 1e-10, config.cubic_solver_tolerance) {
                emit(hit.u, hit.t);
            }
        }
        (SegmentGeometry::Cubic(c1), SegmentGeometry::Cubic(c2)) => {
            if !bounding_boxes_overlap(c1, c2) {
                return;
            }
            for hit in c1.cubic_intersections(c2, config.cubic_solver_tolerance) {
                emit(hit.u, hit.v);
            }
        }
    }
}

fn bounding_boxes_overlap(
    a: &pathclip_geom::CubicBezier,
    b: &pathclip_geom::CubicBezier,
) -> bool {
    let (amin, amax) = a.control_bounding_box();
    let (bmin, bmax) = b.control_bounding_box();
    !(amax.x < bmin.x || bmax.x < amin.x || amax.y < bmin.y || bmax.y < amin.y)
}

/// Evaluates a segment at parameter `t`, used by the queue builder to turn
/// breakpoint parameter pairs into actual endpoints.
pub fn sample(seg: &RawSegment, t: f64) -> Point {
    seg.sample(t)
}

/// A straight-line-specific helper retained for symmetry with the cubic
/// path; trivial, but keeps call sites uniform.
pub fn line_sample(seg: &LineSegment, t: f64) -> Point {
    seg.sample(t)
}
