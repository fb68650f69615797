use thiserror::Error;

/// Root finding error conditions.
///
/// To help with diagnostics, these errors typically return the last relevant
/// `x` position.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RootError {
    /// Bracket ends do not have strictly opposite signs.
    #[error("no sign change on bracket [{x0}, {x1}]: f(x0)={f_x0}, f(x1)={f_x1}")]
    SameSignBracket {
        x0: f64,
        x1: f64,
        f_x0: f64,
        f_x1: f64,
    },

    /// Requested derivative order needs more coefficients than the polynomial
    /// has.
    #[error("polynomial with {len} coefficient(s) has no derivative of order {order}")]
    NonDifferentiablePolynomial { order: usize, len: usize },

    /// Derivative (or its finite-difference surrogate) vanished, sending the
    /// next step to NaN or infinity.
    #[error("singular derivative at x={x}")]
    SingularDerivative { x: f64 },

    /// Secant update divided by coincident function values.
    #[error("singular secant update at x={x}")]
    SingularUpdate { x: f64 },

    /// Iteration cap of the convergence criterion was reached.
    #[error("iteration limit reached, last x={last_x}")]
    IterationLimit { last_x: f64 },

    /// Bracket can no longer shrink in floating point.
    #[error("bracket stalled at x={x} without meeting tolerance")]
    Stalled { x: f64 },
}
