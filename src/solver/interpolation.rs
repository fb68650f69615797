use crate::convergence::IsConverged;
use crate::error::RootError;
use crate::polynomial::Polynomial;
use crate::solver::driver;
use crate::wrap::RealFnEval;

/// Root finding using the Secant Method, run until `finish` accepts.
///
/// The seeds need not bracket a root.  Convergence is superlinear near a
/// simple root but is not guaranteed.
///
/// Pass `convergence::Residual` to stop on `|f(x)|`, or
/// `convergence::Magnitude` to stop on `|x|` itself.
///
/// # Errors
/// * `SingularUpdate` when consecutive function values coincide.
/// * `IterationLimit` if `finish` carries a cap and it is reached.
pub fn secant<C>(poly: &Polynomial, x0: f64, x1: f64, finish: &C) -> Result<f64, RootError>
where
    C: IsConverged,
{
    driver::converge2(
        poly,
        &secant_iteration,
        (x0, x1),
        finish,
        |x| RootError::SingularUpdate { x },
        "secant",
    )
    .map(|a| a.root)
}

/// Secant Method limited to exactly `iterations` updates.  A singular update
/// shows up as NaN or infinity in the result.
pub fn secant_iter(poly: &Polynomial, x0: f64, x1: f64, iterations: usize) -> f64 {
    driver::run2(poly, &secant_iteration, (x0, x1), iterations, "secant").root
}

/// x-intercept of the line through `(x_pre, f_pre)` and `(x_cur, f_cur)`.
fn secant_iteration<F>(_f: &F, (x_pre, f_pre): (f64, f64), (x_cur, f_cur): (f64, f64)) -> f64
where
    F: RealFnEval,
{
    (x_pre * f_cur - x_cur * f_pre) / (f_cur - f_pre)
}
