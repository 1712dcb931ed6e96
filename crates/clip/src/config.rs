//! Tolerances used throughout the clipping pipeline, gathered into a single
//! `Config` rather than scattered as constants: numerical tolerance is a
//! policy callers should be able to tune, not a buried magic number.

/// Tunable tolerances for one clipping invocation.
///
/// Modeled on `lyon_tessellation::FillOptions`: public fields, a `DEFAULT`
/// constant, and `with_*` builder methods that return `Self` by value so
/// they chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Tolerance passed to the cubic real-root solver.
    pub cubic_solver_tolerance: f64,
    /// Interior extrema closer than this to a cubic's endpoints are dropped
    /// rather than producing a near-zero-length monotonic piece.
    pub monotonic_split_epsilon: f64,
    /// Two points closer than this (but not bitwise equal) are treated as
    /// approximately coincident.
    pub approx_equal_tolerance: f64,
    /// Whether approximately-coincident-but-distinct points are a fatal
    /// error, or silently left alone.
    pub fail_on_approx_coincident_points: bool,
    /// Whether post-processing folds consecutive collinear line components
    /// into one.
    pub fold_collinear: bool,
}

impl Config {
    pub const DEFAULT: Config = Config {
        cubic_solver_tolerance: 1e-9,
        monotonic_split_epsilon: 1e-10,
        approx_equal_tolerance: 1e-6,
        fail_on_approx_coincident_points: true,
        fold_collinear: true,
    };

    pub const fn with_cubic_solver_tolerance(mut self, tol: f64) -> Self {
        self.cubic_solver_tolerance = tol;
        self
    }

    pub const fn with_monotonic_split_epsilon(mut self, eps: f64) -> Self {
        self.monotonic_split_epsilon = eps;
        self
    }

    pub const fn with_approx_equal_tolerance(mut self, tol: f64) -> Self {
        self.approx_equal_tolerance = tol;
        self
    }

    pub const fn with_fail_on_approx_coincident_points(mut self, fail: bool) -> Self {
        self.fail_on_approx_coincident_points = fail;
        self
    }

    pub const fn with_fold_collinear(mut self, fold: bool) -> Self {
        self.fold_collinear = fold;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
