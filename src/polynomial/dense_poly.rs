use std::fmt;

/// Error types for polynomial arithmetic
#[derive(Debug, Clone, PartialEq)]
pub enum PolynomialError {
    DivisionByZero,
}

impl fmt::Display for PolynomialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolynomialError::DivisionByZero => {
                write!(f, "polynomial division by an all-zero divisor")
            }
        }
    }
}

impl std::error::Error for PolynomialError {}

/// Evaluate a polynomial at x with the Horner scheme.
///
/// Coefficients are stored in ascending power order: `coeffs[k]` is the
/// coefficient of x^k.
pub fn polyeval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Coefficients of the derivative; the result is one entry shorter than the
/// input. A constant input yields an empty vector.
pub fn polydiff(coeffs: &[f64]) -> Vec<f64> {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, &c)| c * k as f64)
        .collect()
}

/// Remainder of dividing polynomial `p` by polynomial `q`.
///
/// Classical long division returning only the remainder, with the same
/// nominal length as `p` and the entries at and above the divisor degree
/// zeroed. The divisor degree is found by scanning down from the end past
/// exact-zero coefficients; an all-zero divisor is an error rather than a
/// NaN-filled result.
pub fn polyrem(p: &[f64], q: &[f64]) -> Result<Vec<f64>, PolynomialError> {
    let np = p.len() - 1;
    let mut len_q = q.len();
    while len_q > 0 && q[len_q - 1] == 0.0 {
        len_q -= 1;
    }
    if len_q == 0 {
        return Err(PolynomialError::DivisionByZero);
    }
    let nq = len_q - 1;

    let mut rem = p.to_vec();
    if np < nq {
        return Ok(rem);
    }
    let mut quo = vec![0.0; p.len()];
    for k in (0..=np - nq).rev() {
        quo[k] = rem[nq + k] / q[nq];
        for j in (k..nq + k).rev() {
            rem[j] -= quo[k] * q[j - k];
        }
    }
    for r in rem.iter_mut().take(np + 1).skip(nq) {
        *r = 0.0;
    }
    Ok(rem)
}
