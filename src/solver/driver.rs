use log::{debug, trace, warn};

use crate::convergence::IsConverged;
use crate::error::RootError;
use crate::wrap::RealFnEval;

/// Final estimate of a driver run and the number of steps that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Approximation {
    pub root: f64,
    pub steps: usize,
}

/// Builds the error reported when a step leaves the finite reals.
pub(crate) type Singular = fn(f64) -> RootError;

/// Driver for one-point iterative root finders.
///
/// `iterate` maps `(x_n, f(x_n))` to `x_{n+1}`.  Runs until `finish` accepts
/// the current estimate, checking the seed first.  A non-finite step is
/// reported through `singular` rather than returned as a root.  A residual of
/// exactly zero is a fixed point.
pub(crate) fn converge<F, I, C>(
    f: &F,
    iterate: &I,
    start: f64,
    finish: &C,
    singular: Singular,
    method: &str,
) -> Result<Approximation, RootError>
where
    F: RealFnEval,
    I: Fn(&F, f64, f64) -> f64,
    C: IsConverged,
{
    assert!(start.is_finite());

    let mut x_pre = None;
    let mut x_cur = start;
    let mut f_cur = f.eval_f(x_cur);
    let mut steps = 0;

    loop {
        if finish.is_converged(x_pre, x_cur, f_cur) {
            debug!(
                "{}: converged to x={} (f={}) after {} steps",
                method, x_cur, f_cur, steps
            );
            return Ok(Approximation { root: x_cur, steps });
        }
        check_cap(finish, steps, x_cur, method)?;

        let x_new = if f_cur == 0.0 {
            x_cur
        } else {
            iterate(f, x_cur, f_cur)
        };
        if !x_new.is_finite() {
            warn!("{}: step from x={} went to {}", method, x_cur, x_new);
            return Err(singular(x_cur));
        }

        x_pre = Some(x_cur);
        x_cur = x_new;
        f_cur = f.eval_f(x_cur);
        steps += 1;
        trace!("{}: step {} x={} f={}", method, steps, x_cur, f_cur);
    }
}

/// Driver for two-point iterative root finders (secant-style).
///
/// `iterate` maps `((x_{n-1}, f_{n-1}), (x_n, f_n))` to `x_{n+1}`.  Otherwise
/// behaves like `converge`, starting from the second seed.
pub(crate) fn converge2<F, I, C>(
    f: &F,
    iterate: &I,
    start: (f64, f64),
    finish: &C,
    singular: Singular,
    method: &str,
) -> Result<Approximation, RootError>
where
    F: RealFnEval,
    I: Fn(&F, (f64, f64), (f64, f64)) -> f64,
    C: IsConverged,
{
    assert!(start.0.is_finite() && start.1.is_finite());

    let mut pre = (start.0, f.eval_f(start.0));
    let mut cur = (start.1, f.eval_f(start.1));
    let mut steps = 0;

    loop {
        if finish.is_converged(Some(pre.0), cur.0, cur.1) {
            debug!(
                "{}: converged to x={} (f={}) after {} steps",
                method, cur.0, cur.1, steps
            );
            return Ok(Approximation { root: cur.0, steps });
        }
        check_cap(finish, steps, cur.0, method)?;

        let x_new = if cur.1 == 0.0 {
            cur.0
        } else {
            iterate(f, pre, cur)
        };
        if !x_new.is_finite() {
            warn!("{}: step from x={} went to {}", method, cur.0, x_new);
            return Err(singular(cur.0));
        }

        pre = cur;
        cur = (x_new, f.eval_f(x_new));
        steps += 1;
        trace!("{}: step {} x={} f={}", method, steps, cur.0, cur.1);
    }
}

/// Runs exactly `iterations` one-point steps and returns wherever that lands.
/// NaN and infinity propagate into the result.
pub(crate) fn run<F, I>(
    f: &F,
    iterate: &I,
    start: f64,
    iterations: usize,
    method: &str,
) -> Approximation
where
    F: RealFnEval,
    I: Fn(&F, f64, f64) -> f64,
{
    assert!(start.is_finite());

    let mut x = start;
    let mut f_x = f.eval_f(x);
    for step in 1..=iterations {
        if f_x != 0.0 {
            x = iterate(f, x, f_x);
            f_x = f.eval_f(x);
        }
        trace!("{}: step {} x={} f={}", method, step, x, f_x);
    }

    debug!(
        "{}: stopped at x={} (f={}) after {} steps",
        method, x, f_x, iterations
    );
    Approximation {
        root: x,
        steps: iterations,
    }
}

/// Runs exactly `iterations` two-point steps.
pub(crate) fn run2<F, I>(
    f: &F,
    iterate: &I,
    start: (f64, f64),
    iterations: usize,
    method: &str,
) -> Approximation
where
    F: RealFnEval,
    I: Fn(&F, (f64, f64), (f64, f64)) -> f64,
{
    assert!(start.0.is_finite() && start.1.is_finite());

    let mut pre = (start.0, f.eval_f(start.0));
    let mut cur = (start.1, f.eval_f(start.1));
    for step in 1..=iterations {
        if cur.1 != 0.0 {
            let x_new = iterate(f, pre, cur);
            pre = cur;
            cur = (x_new, f.eval_f(x_new));
        }
        trace!("{}: step {} x={} f={}", method, step, cur.0, cur.1);
    }

    debug!(
        "{}: stopped at x={} (f={}) after {} steps",
        method, cur.0, cur.1, iterations
    );
    Approximation {
        root: cur.0,
        steps: iterations,
    }
}

fn check_cap<C>(finish: &C, steps: usize, x_cur: f64, method: &str) -> Result<(), RootError>
where
    C: IsConverged,
{
    match finish.max_iter() {
        Some(max_iter) if steps >= max_iter => {
            warn!("{}: gave up after {} steps at x={}", method, steps, x_cur);
            Err(RootError::IterationLimit { last_x: x_cur })
        }
        _ => Ok(()),
    }
}
