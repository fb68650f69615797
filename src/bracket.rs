//! Brackets: intervals known to straddle a root.

use log::warn;

use crate::wrap::RealFnEval;

/// Bounds represents the closed interval [a,b].
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl Bounds {
    pub fn new(a: f64, b: f64) -> Bounds {
        assert!(a <= b);
        assert!(a.is_finite() && b.is_finite());
        Bounds { a, b }
    }

    /// Interval between two points given in either order.
    pub fn spanning(x0: f64, x1: f64) -> Bounds {
        // min/max would silently drop a NaN
        assert!(x0.is_finite() && x1.is_finite());
        Bounds::new(x0.min(x1), x0.max(x1))
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn middle(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    pub fn size(&self) -> f64 {
        self.b - self.a
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}

/// Whether signs of values differ, properly handling float underflow.
pub(crate) fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    lhs.signum() != rhs.signum()
}

/// Whether one value is strictly negative and the other strictly positive.
pub(crate) fn is_strict_sign_change(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}

/// Number of halvings bisection needs to shrink `bounds` below `accuracy`,
/// i.e. `ceil(log2(size / accuracy))`.
pub fn bisection_steps(bounds: &Bounds, accuracy: f64) -> usize {
    assert!(accuracy > 0.0 && accuracy.is_finite());

    let ratio = bounds.size() / accuracy;
    if ratio <= 1.0 {
        return 0;
    }
    ratio.log2().ceil() as usize
}

/// What a scan found on one grid step.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
    /// Window whose ends have strictly opposite signs, ready for `bisection`.
    Bracket(Bounds),
    /// Grid point where `f` is exactly zero.
    Root(f64),
}

/// Scans interval [a,b] and emits the first window containing a strict sign
/// change, or the first grid point that is already a root.  For a continuous
/// function the Intermediate Value Theorem guarantees that a bracket contains
/// at least one root.
pub fn first_bracket<F>(f: &F, bounds: &Bounds, window_size: f64) -> Option<Hit>
where
    F: RealFnEval,
{
    BracketGenerator::new(f, bounds.clone(), window_size).next()
}

/// Iterator over successive windows of `bounds`, yielding each one that
/// straddles a root and each grid point that hits one exactly.
///
/// The scan stops early once `window_size` is too small to move the window
/// at the current position.
pub struct BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    f: &'a F,
    bounds: Bounds,
    window_size: f64,
    win: Bounds,
    f_a: f64,
    start_root: Option<f64>,
}

impl<'a, F> BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    pub fn new(f: &'a F, bounds: Bounds, window_size: f64) -> BracketGenerator<'a, F> {
        assert!(window_size > 0.0);

        let win = Bounds {
            a: bounds.a,
            b: (bounds.a + window_size).min(bounds.b),
        };
        let f_a = f.eval_f(win.a);
        let start_root = if f_a == 0.0 { Some(win.a) } else { None };
        BracketGenerator {
            f,
            bounds,
            window_size,
            win,
            f_a,
            start_root,
        }
    }
}

impl<'a, F> Iterator for BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    type Item = Hit;

    fn next(&mut self) -> Option<Hit> {
        if let Some(x) = self.start_root.take() {
            return Some(Hit::Root(x));
        }

        while self.win.a < self.bounds.b {
            if self.win.b <= self.win.a {
                warn!(
                    "bracket scan: window size {} cannot advance past x={}",
                    self.window_size, self.win.a
                );
                return None;
            }

            let f_b = self.f.eval_f(self.win.b);
            let hit = if f_b == 0.0 {
                Some(Hit::Root(self.win.b))
            } else if is_strict_sign_change(self.f_a, f_b) {
                Some(Hit::Bracket(self.win.clone()))
            } else {
                None
            };

            self.f_a = f_b;
            self.win.a = self.win.b;
            self.win.b = (self.win.b + self.window_size).min(self.bounds.b);

            if hit.is_some() {
                return hit;
            }
        }
        None
    }
}
