//! Evaluation traits shared by the solvers.
//!
//! Solvers bound their inputs on what they need to evaluate: `f(x)` only, or
//! also the first and second derivatives.  A bare `Polynomial` gives `f(x)`;
//! `WithFirst` and `WithSecond` bundle it with derivative polynomials computed
//! from its coefficients.

use crate::error::RootError;
use crate::polynomial::Polynomial;

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Trait evaluating the second derivative: d2f(x) with x in R^1.
pub trait RealD2fEval {
    fn eval_d2f(&self, x: f64) -> f64;
}

impl RealFnEval for Polynomial {
    fn eval_f(&self, x: f64) -> f64 {
        self.eval(x)
    }
}

/// Polynomial together with its first derivative.
#[derive(Clone, Debug)]
pub struct WithFirst<'a> {
    pub f: &'a Polynomial,
    pub df: Polynomial,
}

impl<'a> WithFirst<'a> {
    /// Fails with `NonDifferentiablePolynomial` when `f` is constant.
    pub fn new(f: &'a Polynomial) -> Result<WithFirst<'a>, RootError> {
        let df = f.derivative()?;
        Ok(WithFirst { f, df })
    }
}

impl<'a> RealFnEval for WithFirst<'a> {
    fn eval_f(&self, x: f64) -> f64 {
        self.f.eval(x)
    }
}

impl<'a> RealDfEval for WithFirst<'a> {
    fn eval_df(&self, x: f64) -> f64 {
        self.df.eval(x)
    }
}

/// Polynomial together with its first and second derivatives.
#[derive(Clone, Debug)]
pub struct WithSecond<'a> {
    pub f: &'a Polynomial,
    pub df: Polynomial,
    pub d2f: Polynomial,
}

impl<'a> WithSecond<'a> {
    /// Fails with `NonDifferentiablePolynomial` when `f` has fewer than three
    /// coefficients.
    pub fn new(f: &'a Polynomial) -> Result<WithSecond<'a>, RootError> {
        // guard on the full order before building anything
        if f.len() < 3 {
            return Err(RootError::NonDifferentiablePolynomial {
                order: 2,
                len: f.len(),
            });
        }
        let df = f.derivative()?;
        let d2f = df.derivative()?;
        Ok(WithSecond { f, df, d2f })
    }
}

impl<'a> RealFnEval for WithSecond<'a> {
    fn eval_f(&self, x: f64) -> f64 {
        self.f.eval(x)
    }
}

impl<'a> RealDfEval for WithSecond<'a> {
    fn eval_df(&self, x: f64) -> f64 {
        self.df.eval(x)
    }
}

impl<'a> RealD2fEval for WithSecond<'a> {
    fn eval_d2f(&self, x: f64) -> f64 {
        self.d2f.eval(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_first() {
        // x^3 - 2x
        let p = Polynomial::new(vec![0.0, -2.0, 0.0, 1.0]);
        let f = WithFirst::new(&p).expect("differentiable");
        assert_eq!(f.eval_f(2.0), 4.0);
        assert_eq!(f.eval_df(2.0), 10.0);
    }

    #[test]
    fn test_with_second() {
        let p = Polynomial::new(vec![0.0, -2.0, 0.0, 1.0]);
        let f = WithSecond::new(&p).expect("twice differentiable");
        assert_eq!(f.eval_f(1.0), -1.0);
        assert_eq!(f.eval_df(1.0), 1.0);
        assert_eq!(f.eval_d2f(1.0), 6.0);
    }

    #[test]
    fn test_degree_guards() {
        let p = Polynomial::new(vec![5.0]);
        assert_eq!(
            WithFirst::new(&p).unwrap_err(),
            RootError::NonDifferentiablePolynomial { order: 1, len: 1 }
        );

        let p = Polynomial::new(vec![5.0, 1.0]);
        assert_eq!(
            WithSecond::new(&p).unwrap_err(),
            RootError::NonDifferentiablePolynomial { order: 2, len: 2 }
        );
    }
}
