use crate::convergence::IsConverged;
use crate::error::RootError;
use crate::polynomial::Polynomial;
use crate::slope::{secant_slope, steffensen_slope};
use crate::solver::driver;
use crate::wrap::{RealD2fEval, RealDfEval, RealFnEval, WithFirst, WithSecond};

fn singular_derivative(x: f64) -> RootError {
    RootError::SingularDerivative { x }
}

/// Root finding using Newton-Raphson, run until `finish` accepts.
///
/// The `x0` indicates the initial guess.  For guesses sufficiently close to
/// the root this algorithm has quadratic convergence.  The derivative is
/// taken from the coefficients.
///
/// * If the second derivative is also wanted, consider Halley's method.
/// * Steffensen and Broyden avoid the derivative altogether.
///
/// # Errors
/// * `NonDifferentiablePolynomial` for polynomials with fewer than two
///   coefficients.
/// * `SingularDerivative` if a step divides by a vanishing derivative.
/// * `IterationLimit` if `finish` carries a cap and it is reached.
pub fn newton<C>(poly: &Polynomial, x0: f64, finish: &C) -> Result<f64, RootError>
where
    C: IsConverged,
{
    let f = WithFirst::new(poly)?;
    driver::converge(&f, &nr_iteration, x0, finish, singular_derivative, "newton")
        .map(|a| a.root)
}

/// Newton-Raphson limited to exactly `iterations` steps.
pub fn newton_iter(poly: &Polynomial, x0: f64, iterations: usize) -> Result<f64, RootError> {
    let f = WithFirst::new(poly)?;
    let a = driver::run(&f, &nr_iteration, x0, iterations, "newton");
    Ok(a.root)
}

/// Evaluate a single iteration for Newton's method.
fn nr_iteration<F>(f: &F, x: f64, f_x: f64) -> f64
where
    F: RealFnEval + RealDfEval,
{
    x - f_x / f.eval_df(x)
}

/// Root finding using Halley's method, run until `finish` accepts.
///
/// For guesses sufficiently close to the root this algorithm has cubic
/// convergence.  Both derivatives are taken from the coefficients.
///
/// A good overview of the derivation, history, and geometric interpretation of
/// Halley's method is in:
///
/// *Scavo, T. R.; Thoo, J. B. (1995). "On the geometry of Halley's method".
/// American Mathematical Monthly. 102 (5): 417-426.*
///
/// # Errors
/// * `NonDifferentiablePolynomial` for polynomials with fewer than three
///   coefficients.
/// * `SingularDerivative` if the step denominator vanishes.
/// * `IterationLimit` if `finish` carries a cap and it is reached.
pub fn halley<C>(poly: &Polynomial, x0: f64, finish: &C) -> Result<f64, RootError>
where
    C: IsConverged,
{
    let f = WithSecond::new(poly)?;
    driver::converge(
        &f,
        &halley_iteration,
        x0,
        finish,
        singular_derivative,
        "halley",
    )
    .map(|a| a.root)
}

/// Halley's method limited to exactly `iterations` steps.
pub fn halley_iter(poly: &Polynomial, x0: f64, iterations: usize) -> Result<f64, RootError> {
    let f = WithSecond::new(poly)?;
    let a = driver::run(&f, &halley_iteration, x0, iterations, "halley");
    Ok(a.root)
}

/// Evaluate a single iteration for Halley's method.
fn halley_iteration<F>(f: &F, x: f64, f_x: f64) -> f64
where
    F: RealFnEval + RealDfEval + RealD2fEval,
{
    let df_x = f.eval_df(x);
    let d2f_x = f.eval_d2f(x);
    x - (2.0 * f_x * df_x) / (2.0 * df_x * df_x - f_x * d2f_x)
}

/// Root finding using Steffensen's method, run until `finish` accepts.
///
/// Needs no derivative: the slope is the forward difference with step
/// `f(x)`.  Converges quadratically near the root, but can diverge or crawl
/// when `x0` is far from it.
///
/// # Errors
/// * `SingularDerivative` if the difference slope vanishes.
/// * `IterationLimit` if `finish` carries a cap and it is reached.
pub fn steffensen<C>(poly: &Polynomial, x0: f64, finish: &C) -> Result<f64, RootError>
where
    C: IsConverged,
{
    driver::converge(
        poly,
        &steffensen_iteration,
        x0,
        finish,
        singular_derivative,
        "steffensen",
    )
    .map(|a| a.root)
}

/// Steffensen's method limited to exactly `iterations` steps.
pub fn steffensen_iter(poly: &Polynomial, x0: f64, iterations: usize) -> f64 {
    driver::run(poly, &steffensen_iteration, x0, iterations, "steffensen").root
}

fn steffensen_iteration<F>(f: &F, x: f64, f_x: f64) -> f64
where
    F: RealFnEval,
{
    x - f_x / steffensen_slope(f, x)
}

/// Root finding using Broyden's method in one dimension, run until `finish`
/// accepts.
///
/// Seeded with two points; each step divides by the chord slope through the
/// two latest estimates.  `_h` is accepted for call compatibility and has no
/// effect on the difference formula.
///
/// # Errors
/// * `SingularDerivative` if the chord slope vanishes.
/// * `IterationLimit` if `finish` carries a cap and it is reached.
pub fn broyden<C>(
    poly: &Polynomial,
    x0: f64,
    x1: f64,
    _h: f64,
    finish: &C,
) -> Result<f64, RootError>
where
    C: IsConverged,
{
    driver::converge2(
        poly,
        &broyden_iteration,
        (x0, x1),
        finish,
        singular_derivative,
        "broyden",
    )
    .map(|a| a.root)
}

/// Broyden's method limited to exactly `iterations` steps.
pub fn broyden_iter(poly: &Polynomial, x0: f64, x1: f64, _h: f64, iterations: usize) -> f64 {
    driver::run2(poly, &broyden_iteration, (x0, x1), iterations, "broyden").root
}

fn broyden_iteration<F>(f: &F, (x_pre, _): (f64, f64), (x_cur, f_cur): (f64, f64)) -> f64
where
    F: RealFnEval,
{
    x_cur - f_cur / secant_slope(f, x_pre, x_cur)
}
