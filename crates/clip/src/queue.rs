//! Turns the per-segment breakpoint lists into left/right `SweepEvent`
//! pairs: lines become one pair per breakpoint interval, cubics are
//! extracted as sub-curves, monotonic-split, and emitted one pair per
//! monotonic piece.

use pathclip_geom::Point;

use crate::breakpoints::BreakpointTable;
use crate::config::Config;
use crate::error::ClipError;
use crate::event::{CurveControl, EventId, EventPool};
use crate::segment::{SegmentGeometry, SegmentTable};

/// Builds every `SweepEvent` for one invocation, returning the (as yet
/// unsorted) full set of event ids. `abstol` gates the monotonic splitter
/// the same way it gates [`pathclip_geom::CubicBezier::monotonic_split_params`].
pub fn build_queue(
    table: &SegmentTable,
    breakpoints: &BreakpointTable,
    pool: &mut EventPool,
    config: &Config,
) -> Result<Vec<EventId>, ClipError> {
    let mut queue = Vec::new();
    let mut endpoints: Vec<Point> = Vec::new();

    for (id, segment) in table.iter() {
        let ts = breakpoints
            .get(&id)
            .ok_or(ClipError::InconsistentQueue { detail: "segment missing from breakpoint table" })?;

        for window in ts.windows(2) {
            let (t0, t1) = (window[0], window[1]);
            if t1 - t0 < config.approx_equal_tolerance {
                continue;
            }

            match segment.geometry {
                SegmentGeometry::Line(line) => {
                    let p0 = line.sample(t0);
                    let p1 = line.sample(t1);
                    if p0 == p1 {
                        continue;
                    }
                    let (left, right) = order_points(p0, p1);
                    endpoints.push(left);
                    endpoints.push(right);
                    let (l, r) = pool.push_pair(
                        left,
                        right,
                        id.input,
                        segment.contour_index,
                        false,
                        None,
                        None,
                        true,
                    );
                    queue.push(l);
                    queue.push(r);
                }
                SegmentGeometry::Cubic(cubic) => {
                    let sub = cubic
                        .sub_bezier(t0, t1)
                        .ok_or(ClipError::DegenerateSubcurve)?;
                    let original_ctrl = CurveControl { c1: sub.p1, c2: sub.p2 };
                    let pieces = sub.monotonic_pieces(config.monotonic_split_epsilon);

                    let mut piece_start: Option<EventId> = None;
                    let piece_count = pieces.len();
                    for (i, piece) in pieces.iter().enumerate() {
                        let is_last = i + 1 == piece_count;
                        let forward = piece.p0.lex_cmp(&piece.p3) != core::cmp::Ordering::Greater;
                        let (left_point, right_point, piece_ctrl) = if forward {
                            (piece.p0, piece.p3, CurveControl { c1: piece.p1, c2: piece.p2 })
                        } else {
                            (piece.p3, piece.p0, CurveControl { c1: piece.p2, c2: piece.p1 })
                        };

                        endpoints.push(left_point);
                        endpoints.push(right_point);
                        let (l, r) = pool.push_pair(
                            left_point,
                            right_point,
                            id.input,
                            segment.contour_index,
                            true,
                            Some(piece_ctrl),
                            Some(original_ctrl),
                            is_last,
                        );

                        match piece_start {
                            None => {
                                piece_start = Some(l);
                            }
                            Some(start) => {
                                pool.get_mut(l).piece_start = start;
                                pool.get_mut(r).piece_start = start;
                            }
                        }

                        queue.push(l);
                        queue.push(r);
                    }
                }
            }
        }
    }

    if config.fail_on_approx_coincident_points {
        if let Some((a, b)) = find_approx_coincident_pair(&endpoints, config.approx_equal_tolerance) {
            return Err(ClipError::ApproxCoincidentPoints { ax: a.x, ay: a.y, bx: b.x, by: b.y });
        }
    }

    Ok(queue)
}

fn order_points(a: Point, b: Point) -> (Point, Point) {
    if a.lex_cmp(&b) == core::cmp::Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    }
}

/// Finds a pair of event endpoints that are distinct (not bitwise equal,
/// which is the ordinary case of shared vertices) but fall within `tol` of
/// each other — a near-miss the sweep-line comparators can't reliably order.
fn find_approx_coincident_pair(points: &[Point], tol: f64) -> Option<(Point, Point)> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap().then(a.y.partial_cmp(&b.y).unwrap()));

    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            if sorted[j].x - sorted[i].x > tol {
                break;
            }
            if sorted[i] == sorted[j] {
                continue;
            }
            let dx = sorted[j].x - sorted[i].x;
            let dy = sorted[j].y - sorted[i].y;
            if (dx * dx + dy * dy).sqrt() < tol {
                return Some((sorted[i], sorted[j]));
            }
        }
    }
    None
}
