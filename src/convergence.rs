//! Stopping criteria for the accuracy-bounded solvers.
//!
//! A criterion decides when an estimate is good enough and may also carry a
//! safety cap on the number of steps.  Without a cap the solvers keep going
//! until the criterion is met.

pub trait IsConverged {
    /// `x_pre` is `None` while the solver is still on its seed.
    fn is_converged(&self, x_pre: Option<f64>, x_cur: f64, f_cur: f64) -> bool;

    /// Optional limit on the number of steps before giving up.
    fn max_iter(&self) -> Option<usize> {
        None
    }
}

/// Converged once the residual `|f(x)|` drops below `accuracy`.  An accuracy
/// of zero asks for an exact root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Residual {
    accuracy: f64,
    max_iter: Option<usize>,
}

impl Residual {
    /// The sign of `accuracy` is ignored.
    pub fn new(accuracy: f64) -> Residual {
        assert!(accuracy.is_finite());
        Residual {
            accuracy: accuracy.abs(),
            max_iter: None,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Residual {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

impl IsConverged for Residual {
    fn is_converged(&self, _x_pre: Option<f64>, _x_cur: f64, f_cur: f64) -> bool {
        if self.accuracy == 0.0 {
            f_cur == 0.0
        } else {
            f_cur.abs() < self.accuracy
        }
    }

    fn max_iter(&self) -> Option<usize> {
        self.max_iter
    }
}

/// Converged once the estimate itself satisfies `|x| < accuracy`.
///
/// Only meaningful for roots near zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnitude {
    accuracy: f64,
    max_iter: Option<usize>,
}

impl Magnitude {
    pub fn new(accuracy: f64) -> Magnitude {
        assert!(accuracy > 0.0);
        assert!(accuracy.is_finite());
        Magnitude {
            accuracy,
            max_iter: None,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Magnitude {
        self.max_iter = Some(max_iter);
        self
    }
}

impl IsConverged for Magnitude {
    fn is_converged(&self, _x_pre: Option<f64>, x_cur: f64, _f_cur: f64) -> bool {
        x_cur.abs() < self.accuracy
    }

    fn max_iter(&self) -> Option<usize> {
        self.max_iter
    }
}

/// Converged once consecutive estimates differ by less than `epsilon_abs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceDelta {
    epsilon_abs: f64,
    max_iter: Option<usize>,
}

impl SequenceDelta {
    pub fn new(epsilon_abs: f64) -> SequenceDelta {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        SequenceDelta {
            epsilon_abs,
            max_iter: None,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> SequenceDelta {
        self.max_iter = Some(max_iter);
        self
    }
}

impl IsConverged for SequenceDelta {
    fn is_converged(&self, x_pre: Option<f64>, x_cur: f64, _f_cur: f64) -> bool {
        match x_pre {
            Some(x_pre) => (x_pre - x_cur).abs() < self.epsilon_abs,
            None => false,
        }
    }

    fn max_iter(&self) -> Option<usize> {
        self.max_iter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_convergence() {
        let c = Residual::new(1e-6);
        assert_eq!(false, c.is_converged(None, 3.0, 2e-6));
        assert_eq!(true, c.is_converged(None, 3.0, -5e-7));
        assert_eq!(None, c.max_iter());
    }

    #[test]
    fn test_residual_exact() {
        let c = Residual::new(0.0);
        assert_eq!(false, c.is_converged(None, 1.0, f64::MIN_POSITIVE));
        assert_eq!(true, c.is_converged(None, 1.0, 0.0));
        assert_eq!(true, c.is_converged(None, 1.0, -0.0));
    }

    #[test]
    fn test_residual_nan_never_converges() {
        let c = Residual::new(1e-3);
        assert_eq!(false, c.is_converged(Some(1.0), f64::NAN, f64::NAN));
    }

    #[test]
    fn test_residual_negative_accuracy() {
        let c = Residual::new(-1e-3);
        assert_eq!(c.accuracy(), 1e-3);
    }

    #[test]
    #[should_panic]
    fn test_residual_accuracy_nan() {
        let _ = Residual::new(f64::NAN);
    }

    #[test]
    fn test_magnitude_convergence() {
        let c = Magnitude::new(1e-3).with_max_iter(7);
        assert_eq!(false, c.is_converged(None, 0.5, 0.0));
        assert_eq!(true, c.is_converged(None, -1e-4, 10.0));
        assert_eq!(Some(7), c.max_iter());
    }

    #[test]
    fn test_sequence_delta_convergence() {
        // too far apart
        let c = SequenceDelta::new(1e-9);
        let x_0 = 10.2;
        assert_eq!(false, c.is_converged(Some(x_0), x_0 + 1e-8, 10.0));

        // just right
        assert_eq!(true, c.is_converged(Some(x_0), x_0 + 5e-10, 10.0));

        // nothing to compare against yet
        assert_eq!(false, c.is_converged(None, x_0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_zero() {
        let _ = SequenceDelta::new(0.0);
    }

    #[test]
    #[should_panic]
    fn test_sequence_delta_accuracy_negative() {
        let _ = SequenceDelta::new(-1.0);
    }

    #[test]
    #[should_panic]
    fn test_magnitude_accuracy_nan() {
        let _ = Magnitude::new(f64::NAN);
    }
}
