//! Approximates real roots of polynomials.
//!
//! Polynomials are coefficient lists, lowest degree first.  Non-polynomial
//! functions can be handled through a truncated Taylor series, see
//! `Polynomial::taylor`.  All arithmetic is `f64`, so expect rounding error.
//!
//! Methods fall into three families:
//!
//! * bracketing: `bisection`, `regula_falsi`
//! * interpolation: `secant`
//! * iterative: `newton`, `halley`, `steffensen`, `broyden`
//!
//! Each has an `_iter` twin that runs a fixed number of steps.
//!
//! ```
//! use polyroot::{newton_iter, secant, Polynomial, Residual};
//!
//! // x^2 - 2
//! let p = Polynomial::new(vec![-2.0, 0.0, 1.0]);
//!
//! let root = secant(&p, 1.0, 2.0, &Residual::new(1e-12)).expect("root");
//! assert!((root - 2f64.sqrt()).abs() < 1e-12);
//!
//! let root = newton_iter(&p, 1.5, 5).expect("differentiable");
//! assert!((root - 2f64.sqrt()).abs() < 1e-12);
//! ```

pub mod bracket;
pub mod convergence;
pub mod error;
pub mod polynomial;
pub mod slope;
pub mod solver;
pub mod wrap;

pub use crate::convergence::{IsConverged, Magnitude, Residual, SequenceDelta};
pub use crate::error::RootError;
pub use crate::polynomial::Polynomial;
pub use crate::solver::{
    bisection, bisection_iter, broyden, broyden_iter, halley, halley_iter, newton, newton_iter,
    regula_falsi, regula_falsi_iter, secant, secant_iter, steffensen, steffensen_iter,
};
