//! Robust arithmetic primitives.
//!
//! Every signed-area or determinant computation in this crate routes
//! through [`diff_of_products`] rather than a naive `a * b - c * d`; the
//! naive form loses almost all precision near tangencies, which is exactly
//! where the sweep comparator most needs to be right.

use arrayvec::ArrayVec;

/// Computes `a * b - c * d` with at most 1.5 ULPs of error, using the
/// Kahan/FMA identity: compute `c * d` exactly via FMA, then correct
/// `a * b - (c * d)` with a second FMA that folds in the rounding error of
/// the first product.
///
/// `f64::mul_add` is used directly; it lowers to a hardware FMA instruction
/// on every target Rust supports as a tier-1 or tier-2 std target, so this
/// has no dependency on a fused-multiply-add crate.
#[inline]
pub fn diff_of_products(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let cd = c * d;
    let err = (-c).mul_add(d, cd);
    let dop = a.mul_add(b, -cd);
    dop + err
}

/// Real roots of `a2*x^2 + a1*x + a0 = 0`.
///
/// Coefficients below `1e-15` in magnitude for `a2` fall back to the linear
/// case.
pub fn solve_quadratic(a0: f64, a1: f64, a2: f64) -> ArrayVec<f64, 2> {
    let mut roots = ArrayVec::new();

    if a2.abs() < 1e-15 {
        if a1.abs() < 1e-15 {
            return roots;
        }
        roots.push(-a0 / a1);
        return roots;
    }

    let discriminant = diff_of_products(a1, a1, 4.0 * a2, a0);
    if discriminant < 0.0 {
        return roots;
    }
    if discriminant == 0.0 {
        roots.push(-a1 / (2.0 * a2));
        return roots;
    }

    // Numerically stable form (Numerical Recipes §5.6): avoids cancellation
    // when a1 and sqrt(discriminant) are close in magnitude and sign.
    let sqrt_d = discriminant.sqrt();
    let q = if a1 >= 0.0 {
        -0.5 * (a1 + sqrt_d)
    } else {
        -0.5 * (a1 - sqrt_d)
    };

    let mut r1 = q / a2;
    let mut r2 = if q != 0.0 { a0 / q } else { r1 };
    if r1 > r2 {
        core::mem::swap(&mut r1, &mut r2);
    }
    roots.push(r1);
    roots.push(r2);
    roots
}

/// Real roots of `a3*x^3 + a2*x^2 + a1*x + a0 = 0`, in ascending order, fed
/// to `consumer`.
///
/// Falls back to [`solve_quadratic`] when `|a3| < tol`. Otherwise depresses
/// the cubic to `t^3 + p*t + q` (via `x = t - a2/(3*a3)`) and dispatches on
/// the discriminant `delta = (q/2)^2 + (p/3)^3`: `delta <= tol` uses the
/// trigonometric (three real roots) form; otherwise Cardano's single real
/// root.
pub fn solve_cubic(a0: f64, a1: f64, a2: f64, a3: f64, mut consumer: impl FnMut(f64), tol: f64) {
    if a3.abs() < tol {
        let mut roots = solve_quadratic(a0, a1, a2);
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for r in roots {
            consumer(r);
        }
        return;
    }

    let b = a2 / a3;
    let c = a1 / a3;
    let d = a0 / a3;

    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = (2.0 * b * b * b) / 27.0 - (b * c) / 3.0 + d;

    let r = q / 2.0;
    let s = p / 3.0;
    let delta = r * r + s * s * s;

    if delta <= 0.0 || delta.abs() < tol {
        // Three real roots (trigonometric method, Viete's substitution).
        let s_clamped = s.min(0.0);
        let m = 2.0 * (-s_clamped).sqrt();
        let theta = if m.abs() < tol {
            0.0
        } else {
            ((3.0 * r) / (s_clamped * m)).clamp(-1.0, 1.0).acos() / 3.0
        };
        let two_pi_3 = 2.0 * core::f64::consts::PI / 3.0;
        let mut roots = [
            m * (theta).cos() - shift,
            m * (theta - two_pi_3).cos() - shift,
            m * (theta - 2.0 * two_pi_3).cos() - shift,
        ];
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for root in roots {
            consumer(root);
        }
    } else {
        // One real root, Cardano's formula.
        let sqrt_delta = delta.sqrt();
        let u = cbrt(-r + sqrt_delta);
        let v = cbrt(-r - sqrt_delta);
        consumer(u + v - shift);
    }
}

#[inline]
fn cbrt(x: f64) -> f64 {
    x.cbrt()
}
