use crate::polynomial::dense_poly::{PolynomialError, polydiff, polyeval, polyrem};
use itertools::Itertools;
use log::warn;

/// Sturm sequence {P0, P1, ..., Pm} of a dense polynomial: P0 is the input,
/// P1 its derivative and every following member the negated remainder of the
/// two preceding ones. Immutable once built.
pub struct SturmSequence {
    polynomials: Vec<Vec<f64>>,
}

impl SturmSequence {
    /// Build the Sturm sequence of `coeffs` (ascending power order).
    ///
    /// The nominal sequence length equals the coefficient count. If an
    /// intermediate remainder vanishes identically the construction stops
    /// there: continuing would divide by the zero polynomial. A zero
    /// remainder only occurs when the input shares roots with its
    /// derivative, i.e. is not squarefree.
    pub fn build(coeffs: &[f64]) -> Result<SturmSequence, PolynomialError> {
        let n = coeffs.len();
        let mut polynomials: Vec<Vec<f64>> = Vec::with_capacity(n);
        polynomials.push(coeffs.to_vec());
        if n > 1 {
            polynomials.push(polydiff(coeffs));
        }
        for j in 2..n {
            let rem = polyrem(&polynomials[j - 2], &polynomials[j - 1])?;
            if rem.iter().all(|&c| c == 0.0) {
                warn!(
                    "Sturm sequence truncated at length {}: zero remainder, input polynomial is not squarefree",
                    j
                );
                break;
            }
            polynomials.push(rem.iter().map(|&c| -c).collect());
        }
        Ok(SturmSequence { polynomials })
    }

    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    pub fn polynomials(&self) -> &[Vec<f64>] {
        &self.polynomials
    }

    /// Number of sign changes in the sequence evaluated at x.
    ///
    /// Exact zeros are dropped before counting, so a grid point landing on a
    /// root of a sequence member does not produce a spurious change.
    pub fn sign_changes_at(&self, x: f64) -> usize {
        self.polynomials
            .iter()
            .map(|p| sign(polyeval(p, x)))
            .filter(|&s| s != 0)
            .tuple_windows()
            .filter(|(prev, next)| prev != next)
            .count()
    }
}

fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
