use crate::polynomial::sturm::SturmSequence;

/// An interval between two adjacent grid abscissas known to contain exactly
/// one root of the target polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootBracket {
    pub start: f64,
    pub end: f64,
}

/// Scan the search interval at a fixed resolution and return one bracket per
/// detected root, in ascending order.
///
/// The grid holds `n_intervals` abscissas a + i*(b-a)/n_intervals, so the
/// right boundary b itself is never sampled. The Sturm sign-change count is
/// evaluated at every grid point and a bracket is recorded wherever the
/// count differs between neighbours: by Sturm's theorem that difference is
/// the number of roots strictly between the two points. The resolution must
/// be fine enough for at most one root per grid cell and no root on a grid
/// point; the caller is responsible for checking the bracket count against
/// the expected number of roots.
pub fn isolate_roots(
    sturm: &SturmSequence,
    a: f64,
    b: f64,
    n_intervals: usize,
) -> Vec<RootBracket> {
    let increment = (b - a) / n_intervals as f64;
    let grid: Vec<f64> = (0..n_intervals)
        .map(|i| a + i as f64 * increment)
        .collect();
    let counts: Vec<usize> = grid.iter().map(|&x| sturm.sign_changes_at(x)).collect();

    let mut brackets = Vec::new();
    for i in 1..n_intervals {
        if counts[i] != counts[i - 1] {
            brackets.push(RootBracket {
                start: grid[i - 1],
                end: grid[i],
            });
        }
    }
    brackets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolates_both_roots_of_quadratic() {
        // (x - 1.5)(x - 2.5) = 3.75 - 4x + x^2
        let seq = SturmSequence::build(&[3.75, -4.0, 1.0]).unwrap();
        let brackets = isolate_roots(&seq, 0.0, 4.0, 10);
        assert_eq!(brackets.len(), 2);
        assert!(brackets[0].start < 1.5 && 1.5 < brackets[0].end);
        assert!(brackets[1].start < 2.5 && 2.5 < brackets[1].end);
    }

    #[test]
    fn test_isolates_cubic_roots_in_order() {
        // (x-1)(x-2)(x-3)
        let seq = SturmSequence::build(&[-6.0, 11.0, -6.0, 1.0]).unwrap();
        let brackets = isolate_roots(&seq, 0.15, 4.15, 40);
        assert_eq!(brackets.len(), 3);
        for (bracket, root) in brackets.iter().zip([1.0, 2.0, 3.0]) {
            assert!(bracket.start < root && root < bracket.end);
        }
        assert!(brackets.windows(2).all(|w| w[0].end <= w[1].start));
    }

    #[test]
    fn test_no_roots_in_interval() {
        let seq = SturmSequence::build(&[3.75, -4.0, 1.0]).unwrap();
        let brackets = isolate_roots(&seq, 5.0, 9.0, 20);
        assert!(brackets.is_empty());
    }

    #[test]
    fn test_coarse_grid_merges_close_roots() {
        // both roots fall into one grid cell of width 4: a single cell
        // cannot separate them, so fewer brackets than roots come back
        let seq = SturmSequence::build(&[3.75, -4.0, 1.0]).unwrap();
        let brackets = isolate_roots(&seq, 0.0, 8.0, 2);
        assert!(brackets.len() < 2);
    }
}
