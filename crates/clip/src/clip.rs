//! The top-level pipeline: segment, intersect, queue, sweep, connect,
//! post-process.

use pathclip_path::Contour;

use crate::breakpoints::collect_breakpoints;
use crate::config::Config;
use crate::connector::connect;
use crate::error::ClipError;
use crate::event::EventPool;
use crate::operator::{BooleanOp, Operator};
use crate::postprocess::{fold_collinear, split_repeated_vertices};
use crate::queue::build_queue;
use crate::segment::build_segment_table;
use crate::sweep::run_sweep;

/// Runs one boolean clip of `sources` against `masks` and returns the
/// resulting contours. Never panics; every internal failure surfaces as a
/// [`ClipError`].
pub fn clip(
    sources: &[Contour],
    masks: &[Contour],
    operation: BooleanOp,
    config: &Config,
) -> Result<Vec<Contour>, ClipError> {
    let table = build_segment_table(sources, masks);
    let breakpoints = collect_breakpoints(&table, config);
    log::debug!(
        "segmented {} subject, {} clipping raw segments",
        table.subject.len(),
        table.clipping.len(),
    );

    let mut pool = EventPool::new();
    let queue = build_queue(&table, &breakpoints, &mut pool, config)?;
    log::debug!("built {} events from {} queue entries", pool.len(), queue.len());
    let sorted = run_sweep(&mut pool, queue)?;

    let mut contours = match operation {
        BooleanOp::Union => connect(&pool, &sorted, Operator::Union, config)?,
        BooleanOp::Intersection => connect(&pool, &sorted, Operator::Intersection, config)?,
        BooleanOp::Difference => connect(&pool, &sorted, Operator::SubjectMinusClipping, config)?,
        BooleanOp::Xor => {
            let mut a = connect(&pool, &sorted, Operator::SubjectMinusClipping, config)?;
            let b = connect(&pool, &sorted, Operator::ClippingMinusSubject, config)?;
            a.extend(b);
            a
        }
        BooleanOp::Divide => {
            let mut a = connect(&pool, &sorted, Operator::SubjectMinusClipping, config)?;
            let b = connect(&pool, &sorted, Operator::ClippingMinusSubject, config)?;
            let c = connect(&pool, &sorted, Operator::Intersection, config)?;
            a.extend(b);
            a.extend(c);
            a
        }
    };

    contours = split_repeated_vertices(contours, config.approx_equal_tolerance);
    if config.fold_collinear {
        contours = contours.iter().map(|c| fold_collinear(c, config.approx_equal_tolerance)).collect();
    }

    log::debug!("{:?} produced {} contours", operation, contours.len());
    Ok(contours)
}
