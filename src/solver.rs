//! Root finding algorithms.
//!
//! Every method comes in two variants:
//!
//! * accuracy-bounded (`newton`, `bisection`, ...) runs until a convergence
//!   criterion from the `convergence` module accepts the estimate.  There is
//!   no step limit unless the criterion carries one.
//! * iteration-bounded (`newton_iter`, `bisection_iter`, ...) performs a fixed
//!   number of steps and returns whatever estimate it reaches.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use polyroot::convergence::Residual;
//! use polyroot::polynomial::Polynomial;
//! use polyroot::solver::newton;
//!
//! // -x^2 + 2x + 1
//! let p = Polynomial::new(vec![1.0, 2.0, -1.0]);
//!
//! let root = newton(&p, 3.0, &Residual::new(1e-12)).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root - 2.41421356237).abs() < 1e-9);
//! ```
//!
//! Using Bisection Method with a safety cap:
//!
//! ```
//! use polyroot::convergence::Residual;
//! use polyroot::polynomial::Polynomial;
//! use polyroot::solver::bisection;
//!
//! let p = Polynomial::new(vec![1.0, 2.0, -1.0]);
//! let conv = Residual::new(1e-12).with_max_iter(200);
//!
//! let root = bisection(&p, 2.0, 3.0, &conv).expect("root");
//! assert!((root - 2.41421356237).abs() < 1e-9);
//! ```

mod bracketing;
mod driver;
mod interpolation;
mod iterative;

pub use self::bracketing::{bisection, bisection_iter, regula_falsi, regula_falsi_iter};
pub use self::interpolation::{secant, secant_iter};
pub use self::iterative::{
    broyden, broyden_iter, halley, halley_iter, newton, newton_iter, steffensen, steffensen_iter,
};
