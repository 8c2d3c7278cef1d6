//! Laguerre polynomial setup.
//!
//! The Laguerre polynomials L_n(x) are orthogonal on [0, ∞) with weight
//! e^(-x); their roots are the nodes of the Gauss-Laguerre quadrature rule.

use crate::Utils::combinatorics::{factorial, nchoosek};

/// Coefficients of L_n in ascending power order:
/// C[k] = (-1)^k * C(n, k) / k!
pub fn laguerre_coefficients(n: usize) -> Vec<f64> {
    (0..=n)
        .map(|k| {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            sign * nchoosek(n, k) / factorial(k)
        })
        .collect()
}

/// L_n'(x) by the closed-form coefficient formula
/// dL[k] = (-1)^(k+1) / k! * C(n, k+1) * x^k, summed over k = 0..n-1.
///
/// Kept separate from the generic polynomial differentiation: the weight
/// computation evaluates the derivative directly from this form.
pub fn laguerre_derivative_at(n: usize, x: f64) -> f64 {
    (0..n)
        .map(|k| {
            let sign = if (k + 1) % 2 == 0 { 1.0 } else { -1.0 };
            sign / factorial(k) * nchoosek(n, k + 1) * x.powi(k as i32)
        })
        .sum()
}
