//! Hybrid root-finding algorithm.
//!
//! Newton-Raphson with divergence monitoring, falling back to Brent's method
//! on the caller's bracket.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{brent, SolverConfig, SolverResult};

/// Newton iterations attempted before falling back to Brent.
const NEWTON_MAX_ITERATIONS: u32 = 20;

/// Consecutive residual blow-ups tolerated before Newton is abandoned.
const MAX_DIVERGENCE: u32 = 3;

/// Hybrid Newton-Raphson / Brent root finder.
///
/// Newton runs first from `initial_guess`. If it fails, or converges to a
/// root outside `bounds`, Brent takes over on `bounds`.
///
/// # Example
///
/// ```rust
/// use bondcurve_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = hybrid(f, df, 1.5, (1.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (a, b) = bounds;
    let newton = newton_with_monitoring(&f, &df, initial_guess, config).and_then(|result| {
        if result.root < a.min(b) || result.root > a.max(b) {
            Err(MathError::invalid_input(format!(
                "Newton root {} outside bounds",
                result.root
            )))
        } else {
            Ok(result)
        }
    });

    match newton {
        Ok(result) => Ok(result),
        Err(newton_err) => {
            debug!("Newton failed from {initial_guess}: {newton_err}; falling back to Brent");
            brent(&f, a, b, config)
        }
    }
}

fn newton_with_monitoring<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut prev_residual = f64::MAX;
    let mut divergence_count = 0;

    let max_iter = config.max_iterations.min(NEWTON_MAX_ITERATIONS);

    for iteration in 0..max_iter {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::invalid_input("Newton evaluated a non-finite value"));
        }

        let residual = fx.abs();
        if residual < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if residual > prev_residual * 2.0 {
            divergence_count += 1;
            if divergence_count >= MAX_DIVERGENCE {
                return Err(MathError::invalid_input("Newton-Raphson diverging"));
            }
        } else {
            divergence_count = 0;
        }
        prev_residual = residual;

        let dfx = df(x);
        if dfx.abs() < 1e-15 || !dfx.is_finite() {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        if step.abs() > 1e10 {
            return Err(MathError::invalid_input("Newton step too large"));
        }

        x -= step;
        if !x.is_finite() {
            return Err(MathError::invalid_input("Newton produced non-finite value"));
        }

        if step.abs() < config.tolerance {
            let final_fx = f(x);
            if !final_fx.is_finite() {
                return Err(MathError::invalid_input("Newton evaluated a non-finite value"));
            }
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(max_iter, f(x).abs()))
}

/// Hybrid solver with a central-difference derivative.
pub fn hybrid_numerical<F>(
    f: F,
    initial_guess: f64,
    bounds: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-8;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    hybrid(&f, df, initial_guess, bounds, config)
}
