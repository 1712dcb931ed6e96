use crate::config::*;

#[test]
fn default_matches_pinned_tolerances() {
    let c = Config::default();
    assert_eq!(c.cubic_solver_tolerance, 1e-9);
    assert_eq!(c.monotonic_split_epsilon, 1e-10);
    assert_eq!(c.approx_equal_tolerance, 1e-6);
    assert!(c.fail_on_approx_coincident_points);
}

#[test]
fn builder_methods_chain() {
    let c = Config::default()
        .with_cubic_solver_tolerance(1e-8)
        .with_fail_on_approx_coincident_points(false);
    assert_eq!(c.cubic_solver_tolerance, 1e-8);
    assert!(!c.fail_on_approx_coincident_points);
    assert_eq!(c.monotonic_split_epsilon, 1e-10);
}
