use log::{debug, trace, warn};

use crate::bracket::{is_sign_change, is_strict_sign_change, Bounds};
use crate::convergence::IsConverged;
use crate::error::RootError;
use crate::polynomial::Polynomial;
use crate::wrap::RealFnEval;

/// Picks the next probe inside the window from its ends and their values.
type Probe = fn(&Bounds, f64, f64) -> f64;

fn midpoint(win: &Bounds, _f_a: f64, _f_b: f64) -> f64 {
    win.middle()
}

/// Where the chord through both ends crosses zero.
fn false_position(win: &Bounds, f_a: f64, f_b: f64) -> f64 {
    win.a - f_a * (win.b - win.a) / (f_b - f_a)
}

/// Root finding via Bisection Method, run until `finish` accepts.
///
/// The seeds `x0` and `x1` may come in either order but `f` must take
/// strictly opposite signs at them.  It always converges given a valid
/// starting bracket, but the speed of convergence is linear.
///
/// # Errors
/// * `SameSignBracket` if the seeds do not straddle a root.
/// * `Stalled` if the bracket shrinks to adjacent floats first.
/// * `IterationLimit` if `finish` carries a cap and it is reached.
pub fn bisection<C>(poly: &Polynomial, x0: f64, x1: f64, finish: &C) -> Result<f64, RootError>
where
    C: IsConverged,
{
    bracket_converge(poly, x0, x1, midpoint, finish, "bisection")
}

/// Bisection Method limited to `iterations` bracket updates.
///
/// Returns the midpoint of the final bracket, or the probe that hit `f = 0`
/// exactly.
pub fn bisection_iter(
    poly: &Polynomial,
    x0: f64,
    x1: f64,
    iterations: usize,
) -> Result<f64, RootError> {
    bracket_run(poly, x0, x1, midpoint, iterations, "bisection")
}

/// Root finding via Regula Falsi (false position), run until `finish`
/// accepts.
///
/// Same contract as `bisection`, but each probe is the chord intersection
/// rather than the midpoint.  Usually faster; on strongly convex brackets one
/// end can stay fixed and progress becomes slow.
pub fn regula_falsi<C>(poly: &Polynomial, x0: f64, x1: f64, finish: &C) -> Result<f64, RootError>
where
    C: IsConverged,
{
    bracket_converge(poly, x0, x1, false_position, finish, "regula falsi")
}

/// Regula Falsi limited to `iterations` bracket updates.
pub fn regula_falsi_iter(
    poly: &Polynomial,
    x0: f64,
    x1: f64,
    iterations: usize,
) -> Result<f64, RootError> {
    bracket_run(poly, x0, x1, false_position, iterations, "regula falsi")
}

/// Orders the seeds and checks they straddle a root.
fn open_bracket<F>(f: &F, x0: f64, x1: f64) -> Result<(Bounds, f64, f64), RootError>
where
    F: RealFnEval,
{
    let win = Bounds::spanning(x0, x1);
    let f_a = f.eval_f(win.a);
    let f_b = f.eval_f(win.b);

    if !is_strict_sign_change(f_a, f_b) {
        return Err(RootError::SameSignBracket {
            x0,
            x1,
            f_x0: f.eval_f(x0),
            f_x1: f.eval_f(x1),
        });
    }
    Ok((win, f_a, f_b))
}

fn bracket_converge<F, C>(
    f: &F,
    x0: f64,
    x1: f64,
    probe: Probe,
    finish: &C,
    method: &str,
) -> Result<f64, RootError>
where
    F: RealFnEval,
    C: IsConverged,
{
    let (mut win, mut f_a, mut f_b) = open_bracket(f, x0, x1)?;
    let mut x_pre = None;
    let mut steps = 0;

    loop {
        let x = probe(&win, f_a, f_b);
        let f_x = f.eval_f(x);
        steps += 1;
        trace!(
            "{}: step {} x={} f={} on [{}, {}]",
            method, steps, x, f_x, win.a, win.b
        );

        if f_x == 0.0 || finish.is_converged(x_pre, x, f_x) {
            debug!(
                "{}: converged to x={} (f={}) after {} steps",
                method, x, f_x, steps
            );
            return Ok(x);
        }

        // probe must land strictly inside for the window to shrink
        if !(win.a < x && x < win.b) {
            warn!(
                "{}: bracket [{}, {}] cannot shrink further",
                method, win.a, win.b
            );
            return Err(RootError::Stalled { x });
        }
        if let Some(max_iter) = finish.max_iter() {
            if steps >= max_iter {
                warn!("{}: gave up after {} steps at x={}", method, steps, x);
                return Err(RootError::IterationLimit { last_x: x });
            }
        }

        if is_sign_change(f_a, f_x) {
            win.b = x;
            f_b = f_x;
        } else {
            win.a = x;
            f_a = f_x;
        }
        x_pre = Some(x);
    }
}

fn bracket_run<F>(
    f: &F,
    x0: f64,
    x1: f64,
    probe: Probe,
    iterations: usize,
    method: &str,
) -> Result<f64, RootError>
where
    F: RealFnEval,
{
    let (mut win, mut f_a, mut f_b) = open_bracket(f, x0, x1)?;

    let mut x = probe(&win, f_a, f_b);
    for step in 1..=iterations {
        let f_x = f.eval_f(x);
        if f_x == 0.0 {
            debug!("{}: exact root x={} at step {}", method, x, step);
            return Ok(x);
        }
        if !(win.a < x && x < win.b) {
            debug!("{}: bracket exhausted at step {}", method, step);
            break;
        }

        if is_sign_change(f_a, f_x) {
            win.b = x;
            f_b = f_x;
        } else {
            win.a = x;
            f_a = f_x;
        }
        x = probe(&win, f_a, f_b);
        trace!("{}: step {} bracket [{}, {}]", method, step, win.a, win.b);
    }

    debug!("{}: stopped at x={} after {} steps", method, x, iterations);
    Ok(x)
}
