use crate::polynomial::dense_poly::polyeval;
use log::warn;

/// Result of one bisection refinement run
#[derive(Debug, Clone)]
pub struct BisectionResult {
    pub root: f64,
    pub function_value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Bisection on a dense-coefficient polynomial over [a, b].
///
/// The interval is assumed to bracket exactly one root, which the isolator
/// guarantees. Terminates once |f(midpoint)| < tolerance; the stored f(a)
/// is refreshed whenever the left endpoint moves. Exhausting the iteration
/// budget is a soft condition: the last midpoint is returned with
/// `converged: false` and a warning is logged.
pub fn bisection(
    coeffs: &[f64],
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> BisectionResult {
    let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
    let mut fa = polyeval(coeffs, a);
    let mut iterations = 0;
    let mut c = (a + b) / 2.0;
    let mut fc = polyeval(coeffs, c);
    loop {
        if fc.abs() < tolerance {
            return BisectionResult {
                root: c,
                function_value: fc,
                iterations,
                converged: true,
            };
        }
        if iterations >= max_iterations {
            break;
        }
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
        c = (a + b) / 2.0;
        fc = polyeval(coeffs, c);
        iterations += 1;
    }
    warn!(
        "bisection exhausted {} iterations on [{:.6}, {:.6}], returning last midpoint {:.10} with |f| = {:.3e}",
        max_iterations,
        a,
        b,
        c,
        fc.abs()
    );
    BisectionResult {
        root: c,
        function_value: fc,
        iterations,
        converged: false,
    }
}
