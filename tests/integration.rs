use approx::assert_abs_diff_eq;

use polyroot::bracket::{Bounds, BracketGenerator, Hit};
use polyroot::convergence::{Magnitude, Residual};
use polyroot::polynomial::Polynomial;
use polyroot::solver::{bisection, halley, newton, newton_iter, secant, steffensen};
use polyroot::RootError;

#[test]
fn test_end_to_end() {
    // (x+2)(x-1)(x-3) = 6 - 5x - 2x^2 + x^3
    let p = Polynomial::new(vec![6.0, -5.0, -2.0, 1.0]);

    // search for root-holding brackets
    let window_size = 0.3;
    let bounds = Bounds::new(-3.1, 4.0);
    let expected = [-2.0, 1.0, 3.0];

    let conv = Residual::new(1e-12);
    let mut found = 0;
    let hits = BracketGenerator::new(&p, bounds, window_size);
    for (hit, expected_root) in hits.zip(expected.iter()) {
        let b = match hit {
            Hit::Bracket(b) => b,
            Hit::Root(x) => panic!("grid should not hit a root, got {}", x),
        };
        let computed_root = bisection(&p, b.a(), b.b(), &conv).expect("found root");
        assert_abs_diff_eq!(computed_root, *expected_root, epsilon = 1e-9);

        // polish the bracket midpoint with a faster method
        let polished = newton(&p, b.middle(), &conv).expect("found root");
        assert_abs_diff_eq!(polished, *expected_root, epsilon = 1e-12);
        found += 1;
    }
    assert_eq!(found, 3);
}

#[test]
fn test_scan_with_root_on_grid() {
    // (x-1)(x-2.2) = 2.2 - 3.2x + x^2, the grid of 0.5 lands on x=1
    let p = Polynomial::new(vec![2.2, -3.2, 1.0]);
    let conv = Residual::new(1e-12);

    let mut roots = Vec::new();
    for hit in BracketGenerator::new(&p, Bounds::new(0.0, 3.0), 0.5) {
        match hit {
            Hit::Bracket(b) => roots.push(bisection(&p, b.a(), b.b(), &conv).expect("found root")),
            Hit::Root(x) => roots.push(x),
        }
    }

    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0], 1.0);
    assert_abs_diff_eq!(roots[1], 2.2, epsilon = 1e-9);
}

#[test]
fn test_maclaurin_cosine_root() {
    // cos(x) truncated at degree 10, root at pi/2
    let derivatives = [1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
    let p = Polynomial::maclaurin(&derivatives);

    let root = halley(&p, 1.5, &Residual::new(1e-12)).expect("found root");
    assert_abs_diff_eq!(root, std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
}

#[test]
fn test_failures_are_reported() {
    let constant = Polynomial::new(vec![5.0]);
    assert_eq!(
        newton(&constant, 0.0, &Residual::new(1e-9)),
        Err(RootError::NonDifferentiablePolynomial { order: 1, len: 1 })
    );
    assert_eq!(
        halley(&constant, 0.0, &Residual::new(1e-9)),
        Err(RootError::NonDifferentiablePolynomial { order: 2, len: 1 })
    );

    let positive = Polynomial::new(vec![1.0, 0.0, 1.0]);
    let e = bisection(&positive, -1.0, 1.0, &Residual::new(1e-9)).unwrap_err();
    assert!(matches!(e, RootError::SameSignBracket { .. }));
    assert!(e.to_string().starts_with("no sign change"));
}

#[test]
fn test_solvers_are_pure() {
    let p = Polynomial::new(vec![-7.0, 1.0, 0.0, 1.0]);
    let conv = Residual::new(1e-12);

    let first = (
        newton(&p, 2.0, &conv).expect("root"),
        steffensen(&p, 1.8, &conv).expect("root"),
        secant(&p, 1.0, 2.0, &conv).expect("root"),
        newton_iter(&p, 2.0, 4).expect("root"),
    );
    let second = (
        newton(&p, 2.0, &conv).expect("root"),
        steffensen(&p, 1.8, &conv).expect("root"),
        secant(&p, 1.0, 2.0, &conv).expect("root"),
        newton_iter(&p, 2.0, 4).expect("root"),
    );
    assert_eq!(first, second);
    assert_eq!(p, Polynomial::new(vec![-7.0, 1.0, 0.0, 1.0]));
}

#[test]
fn test_secant_magnitude_stop() {
    // x^2 + x, root at zero
    let p = Polynomial::new(vec![0.0, 1.0, 1.0]);
    let root = secant(&p, 0.3, 0.2, &Magnitude::new(1e-10)).expect("found root");
    assert!(root.abs() < 1e-10);
}
