//! Fatal error kinds for one clipping invocation.

/// The clipping engine's error enumeration. All variants are fatal: once
/// raised, the invocation's `bad` flag is set and the public API returns an
/// empty contour set rather than partial output.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipError {
    /// `sub_bezier` could not reconstruct the interior control points (the
    /// ratio it solves for came out non-finite or zero).
    DegenerateSubcurve,
    /// A post-build sanity check on the sorted event queue failed: events
    /// out of x-order, a twin pair whose points disagree, or a same-point
    /// run with odd left/right multiplicity.
    InconsistentQueue { detail: &'static str },
    /// Two distinct event points fall within `approx_equal_tolerance` of
    /// each other without being bitwise equal, and the config says to treat
    /// that as fatal.
    ApproxCoincidentPoints { ax: f64, ay: f64, bx: f64, by: f64 },
    /// The sweep-line's active set rejected an insert (duplicate key) or an
    /// erase (no matching entry).
    SweepLineConflict { detail: &'static str },
    /// The edge connector couldn't find an unprocessed neighbor to continue
    /// a contour walk.
    MissingConnectorHop,
}

impl core::fmt::Display for ClipError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClipError::DegenerateSubcurve => write!(f, "degenerate sub-curve reconstruction"),
            ClipError::InconsistentQueue { detail } => {
                write!(f, "inconsistent event queue: {}", detail)
            }
            ClipError::ApproxCoincidentPoints { ax, ay, bx, by } => write!(
                f,
                "approximately coincident distinct points: ({}, {}) and ({}, {})",
                ax, ay, bx, by
            ),
            ClipError::SweepLineConflict { detail } => write!(f, "sweep-line conflict: {}", detail),
            ClipError::MissingConnectorHop => write!(f, "edge connector found no unprocessed hop"),
        }
    }
}

impl std::error::Error for ClipError {}
