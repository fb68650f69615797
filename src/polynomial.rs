//! Real polynomials stored as coefficient sequences.
//!
//! Coefficients are listed lowest degree first, so `[c0, c1, c2]` is the
//! polynomial `c0 + c1*x + c2*x^2`.  Trailing zero coefficients are kept as
//! given.

use std::fmt;
use std::iter::FromIterator;

use crate::error::RootError;

/// Polynomial with real coefficients, index `i` multiplying `x^i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Polynomial {
        Polynomial { coeffs }
    }

    /// Builds the truncated Taylor series about `center` from the derivative
    /// values `f(center), f'(center), f''(center), ...`, expanded into the
    /// power basis.
    pub fn taylor(center: f64, derivatives: &[f64]) -> Polynomial {
        assert!(center.is_finite());

        let mut factorial = 1.0;
        let terms: Vec<f64> = derivatives
            .iter()
            .enumerate()
            .map(|(k, d)| {
                if k > 0 {
                    factorial *= k as f64;
                }
                d / factorial
            })
            .collect();

        // Horner in (x - center): p <- p*(x - center) + t_k
        let mut coeffs: Vec<f64> = Vec::with_capacity(terms.len());
        for t in terms.iter().rev() {
            coeffs.push(0.0);
            for i in (1..coeffs.len()).rev() {
                coeffs[i] = coeffs[i - 1] - center * coeffs[i];
            }
            coeffs[0] = t - center * coeffs[0];
        }
        Polynomial { coeffs }
    }

    /// Taylor series about zero.
    pub fn maclaurin(derivatives: &[f64]) -> Polynomial {
        Polynomial::taylor(0.0, derivatives)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Nominal degree, counting trailing zero coefficients.  `None` for the
    /// empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Whether no derivative-based solver can work with this polynomial.
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() < 2
    }

    /// Evaluates the polynomial at `x` with Horner's scheme.  NaN and infinity
    /// propagate through IEEE arithmetic.
    pub fn eval(&self, x: f64) -> f64 {
        let mut coeffs = self.coeffs.iter().rev();
        match coeffs.next() {
            Some(&lead) => coeffs.fold(lead, |acc, c| acc * x + c),
            None => 0.0,
        }
    }

    /// First derivative.
    pub fn derivative(&self) -> Result<Polynomial, RootError> {
        self.nth_derivative(1)
    }

    /// Derivative of the given order, computed from the coefficients.
    ///
    /// Order `n` needs at least `n + 1` coefficients; anything shorter has
    /// nothing left to differentiate.
    pub fn nth_derivative(&self, order: usize) -> Result<Polynomial, RootError> {
        if self.coeffs.len() < order + 1 {
            return Err(RootError::NonDifferentiablePolynomial {
                order,
                len: self.coeffs.len(),
            });
        }

        let mut d = self.clone();
        for _ in 0..order {
            d = d.differentiate_once();
        }
        Ok(d)
    }

    fn differentiate_once(&self) -> Polynomial {
        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| i as f64 * c)
            .collect()
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Polynomial {
        Polynomial::new(coeffs)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coeffs: &[f64]) -> Polynomial {
        Polynomial::new(coeffs.to_vec())
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Polynomial {
        Polynomial::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}x", c)?,
                _ => write!(f, "{}x^{}", c, i)?,
            }
        }
        Ok(())
    }
}
