//! Brent's root-finding algorithm.
//!
//! The fallback leg of [`hybrid`](super::hybrid). It runs on the bracket the
//! caller supplied and every iterate stays inside it.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Keeps a sign-changing bracket `[b, c]` around the root and tries inverse
/// quadratic or secant steps from `b`, bisecting whenever a step would not
/// shrink the bracket fast enough. Stops once `|f(b)|` is within the
/// configured tolerance or the bracket has collapsed to rounding noise.
///
/// # Errors
///
/// `InvalidBracket` if `f(a)` and `f(b)` share a sign or either is not
/// finite; `InvalidInput` if an interior evaluation is not finite;
/// `ConvergenceFailed` if the iteration budget runs out.
///
/// # Example
///
/// ```rust
/// use bondcurve_math::solvers::{brent, SolverConfig};
///
/// // Rate at which a two-year zero is worth 90
/// let f = |r: f64| 100.0 / (1.0 + r).powi(2) - 90.0;
///
/// let result = brent(f, 0.0, 0.5, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = (a, b);
    let (mut fa, mut fb) = (f(a), f(b));

    if !(fa.is_finite() && fb.is_finite()) || fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // c is the contrapoint: f(b) and f(c) always straddle zero
    let (mut c, mut fc) = (a, fa);
    let mut step = b - a;
    let mut prev_step = step;

    for iteration in 0..config.max_iterations {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            step = b - a;
            prev_step = step;
        }
        if fc.abs() < fb.abs() {
            (a, b, c) = (b, c, b);
            (fa, fb, fc) = (fb, fc, fb);
        }

        let min_step = 2.0 * f64::EPSILON * b.abs() + 0.5 * f64::EPSILON;
        let half_width = 0.5 * (c - b);

        if fb.abs() <= config.tolerance || half_width.abs() <= min_step {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        let interpolated = if prev_step.abs() >= min_step && fa.abs() > fb.abs() {
            interpolation_step(a, b, c, fa, fb, fc, half_width)
                .filter(|&(p, q)| {
                    let limit = 3.0 * half_width * q - (min_step * q).abs();
                    2.0 * p.abs() < limit.min((prev_step * q).abs())
                })
                .map(|(p, q)| p / q)
        } else {
            None
        };

        match interpolated {
            Some(d) => {
                prev_step = step;
                step = d;
            }
            None => {
                step = half_width;
                prev_step = step;
            }
        }

        a = b;
        fa = fb;
        b += if step.abs() > min_step {
            step
        } else {
            min_step.copysign(half_width)
        };
        fb = f(b);
        if !fb.is_finite() {
            return Err(MathError::invalid_input(format!(
                "Brent evaluated a non-finite value at {b}"
            )));
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, fb.abs()))
}

/// Inverse quadratic step from three points, or a secant step when only two
/// are distinct. Returns the step as `p / q` so the caller can test it before
/// dividing.
#[allow(clippy::too_many_arguments)]
fn interpolation_step(
    a: f64,
    b: f64,
    c: f64,
    fa: f64,
    fb: f64,
    fc: f64,
    half_width: f64,
) -> Option<(f64, f64)> {
    let s = fb / fa;
    let (p, q) = if a == c {
        (2.0 * half_width * s, 1.0 - s)
    } else {
        let qa = fa / fc;
        let r = fb / fc;
        (
            s * (2.0 * half_width * qa * (qa - r) - (b - a) * (r - 1.0)),
            (qa - 1.0) * (r - 1.0) * (s - 1.0),
        )
    };

    if q == 0.0 || !p.is_finite() || !q.is_finite() {
        return None;
    }
    // Fold the sign into q so p is non-negative
    Some(if p > 0.0 { (p, -q) } else { (-p, q) })
}
