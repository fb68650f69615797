//! Finite-difference slopes for the derivative-free solvers.

use crate::wrap::RealFnEval;

/// Slope of the chord through `(x0, f(x0))` and `(x1, f(x1))`.  Used by
/// Broyden's method in place of the derivative.
pub fn secant_slope<F>(f: &F, x0: f64, x1: f64) -> f64
where
    F: RealFnEval,
{
    (f.eval_f(x1) - f.eval_f(x0)) / (x1 - x0)
}

/// Steffensen's slope `g(x) = (f(x + f(x)) - f(x)) / f(x)`, a forward
/// difference whose step is the residual itself.
///
/// Undefined (NaN) when `f(x)` is exactly zero.
pub fn steffensen_slope<F>(f: &F, x: f64) -> f64
where
    F: RealFnEval,
{
    let h = f.eval_f(x);
    (f.eval_f(x + h) - h) / h
}
