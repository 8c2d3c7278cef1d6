use crate::Utils::report::{brackets_table, rule_table};
use crate::numerical::bisection::bisection;
use crate::numerical::root_isolation::{RootBracket, isolate_roots};
use crate::polynomial::dense_poly::PolynomialError;
use crate::polynomial::sturm::SturmSequence;
use crate::quadrature::laguerre::{laguerre_coefficients, laguerre_derivative_at};
use chrono::Local;
use log::{error, info, warn};
use nalgebra::DVector;
use simplelog::*;
use std::fmt;
use std::fs::File;

/// Error types for the quadrature assembly pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// the grid scan did not isolate as many brackets as nodes requested:
    /// the search interval or the grid resolution is insufficient
    BracketCountMismatch { expected: usize, found: usize },
    /// polynomial arithmetic failed while building the Sturm sequence
    Polynomial(PolynomialError),
    InvalidConfiguration(String),
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadratureError::BracketCountMismatch { expected, found } => write!(
                f,
                "expected {} root brackets but the grid scan found {}",
                expected, found
            ),
            QuadratureError::Polynomial(e) => write!(f, "polynomial arithmetic error: {}", e),
            QuadratureError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for QuadratureError {}

impl From<PolynomialError> for QuadratureError {
    fn from(e: PolynomialError) -> Self {
        QuadratureError::Polynomial(e)
    }
}

/// Final output of the generator: nodes and weights of the n-point rule,
/// index-aligned and ascending by node.
///
/// The weights are the classical Gauss-Laguerre weights, so
/// Σ w_i f(x_i) ≈ ∫0..∞ f(x) e^(-x) dx and the weights sum to 1.
#[derive(Debug, Clone)]
pub struct QuadratureRule {
    pub abscissas: DVector<f64>,
    pub weights: DVector<f64>,
}

impl QuadratureRule {
    pub fn order(&self) -> usize {
        self.abscissas.len()
    }

    /// Weights scaled by e^(x_i), for integrands that do not carry the
    /// e^(-x) factor themselves: Σ w_i e^(x_i) f(x_i) ≈ ∫0..∞ f(x) dx.
    pub fn scaled_weights(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.weights.len(),
            self.weights
                .iter()
                .zip(self.abscissas.iter())
                .map(|(w, x)| w * x.exp()),
        )
    }

    /// Σ w_i f(x_i) ≈ ∫0..∞ f(x) e^(-x) dx
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        self.abscissas
            .iter()
            .zip(self.weights.iter())
            .map(|(&x, &w)| w * f(x))
            .sum()
    }

    /// Σ w_i e^(x_i) f(x_i) ≈ ∫0..∞ f(x) dx
    pub fn integrate_scaled<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        self.abscissas
            .iter()
            .zip(self.weights.iter())
            .map(|(&x, &w)| w * x.exp() * f(x))
            .sum()
    }
}

/// Gauss-Laguerre quadrature rule generator.
///
/// Pipeline: Laguerre coefficients -> Sturm sequence -> root brackets from a
/// grid scan -> bisection per bracket -> weights from the closed-form
/// derivative. Usage follows the solver convention of this family: create an
/// instance, adjust the public parameters or call the setters, `solve()`,
/// then `get_result()` or `print_rule()`.
pub struct LaguerreQuadrature {
    /// quadrature order: the number of nodes requested
    pub n: usize,
    /// left end of the root search interval
    pub interval_start: f64,
    /// right end of the root search interval
    pub interval_end: f64,
    /// number of grid cells used for root isolation
    pub grid_resolution: usize,
    /// bisection tolerance on |L_n(x)|
    pub tolerance: f64,
    /// bisection iteration cap per root
    pub max_iterations: usize,
    pub loglevel: Option<String>,
    /// also write the log to a timestamped file
    pub save_log: bool,
    /// brackets found by the last solve
    pub brackets: Vec<RootBracket>,
    pub result: Option<QuadratureRule>,
}

impl LaguerreQuadrature {
    pub fn new() -> LaguerreQuadrature {
        LaguerreQuadrature {
            n: 32,
            interval_start: -1e-2,
            interval_end: 120.0,
            grid_resolution: 1500,
            tolerance: 1e-10,
            max_iterations: 5000,
            loglevel: Some("info".to_string()),
            save_log: false,
            brackets: Vec::new(),
            result: None,
        }
    }

    pub fn with_order(n: usize) -> LaguerreQuadrature {
        let mut quad = LaguerreQuadrature::new();
        quad.n = n;
        quad
    }

    pub fn set_order(&mut self, n: usize) {
        self.n = n;
    }

    pub fn set_search_interval(&mut self, start: f64, end: f64, resolution: usize) {
        self.interval_start = start;
        self.interval_end = end;
        self.grid_resolution = resolution;
    }

    pub fn set_refinement(&mut self, tolerance: f64, max_iterations: usize) {
        self.tolerance = tolerance;
        self.max_iterations = max_iterations;
    }

    fn validate(&self) -> Result<(), QuadratureError> {
        if self.n == 0 {
            return Err(QuadratureError::InvalidConfiguration(
                "quadrature order must be at least 1".to_string(),
            ));
        }
        if !(self.interval_start < self.interval_end) {
            return Err(QuadratureError::InvalidConfiguration(format!(
                "search interval [{}, {}] is empty",
                self.interval_start, self.interval_end
            )));
        }
        if self.grid_resolution < 2 {
            return Err(QuadratureError::InvalidConfiguration(
                "grid resolution must be at least 2".to_string(),
            ));
        }
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    //                                       main pipeline
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

    pub fn solver(&mut self) -> Result<QuadratureRule, QuadratureError> {
        self.validate()?;
        let n = self.n;
        let coeffs = laguerre_coefficients(n);
        let sturm = SturmSequence::build(&coeffs)?;
        info!("Sturm sequence of length {} built for L_{}", sturm.len(), n);

        let brackets = isolate_roots(
            &sturm,
            self.interval_start,
            self.interval_end,
            self.grid_resolution,
        );
        info!("\n{}", brackets_table(&brackets));
        if brackets.len() != n {
            error!(
                "isolated {} brackets for a {}-point rule: the search interval or grid resolution is insufficient",
                brackets.len(),
                n
            );
            return Err(QuadratureError::BracketCountMismatch {
                expected: n,
                found: brackets.len(),
            });
        }
        self.brackets = brackets.clone();

        let mut abscissas: Vec<f64> = Vec::with_capacity(n);
        let mut not_converged = 0usize;
        for bracket in &brackets {
            let refined = bisection(
                &coeffs,
                bracket.start,
                bracket.end,
                self.tolerance,
                self.max_iterations,
            );
            if !refined.converged {
                not_converged += 1;
            }
            abscissas.push(refined.root);
        }
        if not_converged > 0 {
            warn!(
                "{} of {} roots did not meet the tolerance {:.1e}, best-effort midpoints used",
                not_converged, n, self.tolerance
            );
        }

        let weights: Vec<f64> = abscissas
            .iter()
            .map(|&x| {
                let slope = laguerre_derivative_at(n, x);
                1.0 / (x * slope * slope)
            })
            .collect();

        let rule = QuadratureRule {
            abscissas: DVector::from_vec(abscissas),
            weights: DVector::from_vec(weights),
        };
        info!("\n{}", rule_table(&rule));
        self.result = Some(rule.clone());
        Ok(rule)
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<QuadratureRule, QuadratureError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            return self.solver();
        }
        let log_option = if let Some(level) = self.loglevel.clone() {
            match level.as_str() {
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => panic!("loglevel must be debug, info, warn or error"),
            }
        } else {
            LevelFilter::Info
        };
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )];
        if self.save_log {
            let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
            let name = format!("log_{}.txt", date_and_time);
            if let Ok(file) = File::create(name) {
                loggers.push(WriteLogger::new(log_option, Config::default(), file));
            }
        }
        let logger_instance = CombinedLogger::init(loggers);
        match logger_instance {
            Ok(()) => {
                let res = self.solver();
                info!(" \n \n Program ended");
                res
            }
            Err(_) => self.solver(),
        }
    }

    pub fn get_result(&self) -> Option<QuadratureRule> {
        self.result.clone()
    }

    /// print the computed rule and the bracket intervals to stdout
    pub fn print_rule(&self) {
        match &self.result {
            Some(rule) => {
                println!("{}-point Gauss Laguerre", rule.order());
                println!("{}", rule_table(rule));
                println!("{}", brackets_table(&self.brackets));
            }
            None => println!("No rule computed yet"),
        }
    }
}

impl Default for LaguerreQuadrature {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::dense_poly::polyeval;
    use approx::assert_relative_eq;

    fn reference_rule(n: usize) -> QuadratureRule {
        let mut quad = LaguerreQuadrature::with_order(n);
        quad.loglevel = Some("off".to_string());
        quad.solve().unwrap()
    }

    #[test]
    fn test_bracket_count_matches_order() {
        for n in [2usize, 4, 8, 16, 32] {
            let mut quad = LaguerreQuadrature::with_order(n);
            quad.loglevel = Some("off".to_string());
            quad.solve().unwrap();
            assert_eq!(quad.brackets.len(), n, "order {}", n);
        }
    }

    #[test]
    fn test_abscissas_are_roots_of_laguerre_polynomial() {
        for n in [2usize, 4, 8] {
            let rule = reference_rule(n);
            let coeffs = laguerre_coefficients(n);
            for &x in rule.abscissas.iter() {
                assert!(
                    polyeval(&coeffs, x).abs() < 1e-8,
                    "L_{}({}) = {}",
                    n,
                    x,
                    polyeval(&coeffs, x)
                );
            }
        }
    }

    #[test]
    fn test_abscissas_positive_and_ascending() {
        for n in [2usize, 8, 16, 32] {
            let rule = reference_rule(n);
            assert_eq!(rule.order(), n);
            assert!(rule.abscissas[0] > 0.0);
            for i in 1..n {
                assert!(rule.abscissas[i] > rule.abscissas[i - 1]);
            }
        }
    }

    #[test]
    fn test_weights_positive() {
        for n in [2usize, 8, 16, 32] {
            let rule = reference_rule(n);
            assert!(rule.weights.iter().all(|&w| w > 0.0));
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        // zeroth moment of e^(-x) on [0, inf) is Γ(1) = 1
        for n in [2usize, 4, 8, 16, 32] {
            let rule = reference_rule(n);
            assert_relative_eq!(rule.weights.sum(), 1.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_exactness_on_low_degree_monomials() {
        // an n-point rule integrates x^k e^(-x) exactly for k <= 2n-1,
        // and the exact value is k!
        let rule = reference_rule(5);
        let mut exact = 1.0;
        for k in 1..=8usize {
            exact *= k as f64;
            let approx_value = rule.integrate(|x| x.powi(k as i32));
            assert_relative_eq!(approx_value, exact, max_relative = 1e-8);
        }
    }

    #[test]
    fn test_classical_two_point_rule() {
        let rule = reference_rule(2);
        assert_relative_eq!(rule.abscissas[0], 0.5857864376, epsilon = 1e-4);
        assert_relative_eq!(rule.abscissas[1], 3.4142135624, epsilon = 1e-4);
        assert_relative_eq!(rule.weights[0], 0.8535533906, epsilon = 1e-4);
        assert_relative_eq!(rule.weights[1], 0.1464466094, epsilon = 1e-4);
    }

    #[test]
    fn test_one_point_rule() {
        // L_1 = 1 - x: single node at 1 with unit weight
        let rule = reference_rule(1);
        assert_relative_eq!(rule.abscissas[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(rule.weights[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scaled_weights_consistency() {
        let rule = reference_rule(4);
        let scaled = rule.scaled_weights();
        for i in 0..rule.order() {
            assert_relative_eq!(
                scaled[i],
                rule.weights[i] * rule.abscissas[i].exp(),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn test_agreement_with_gauss_quad_crate() {
        let rule = reference_rule(8);
        let reference =
            gauss_quad::GaussLaguerre::new(8, 0.0).expect("failed to create reference rule");
        let f = |x: f64| x * x;
        assert_relative_eq!(rule.integrate(f), reference.integrate(&f), epsilon = 1e-8);
    }

    #[test]
    fn test_bracket_count_mismatch_is_reported() {
        // the interval [−0.01, 5] holds only 4 of the 8 roots of L_8
        let mut quad = LaguerreQuadrature::with_order(8);
        quad.loglevel = Some("off".to_string());
        quad.set_search_interval(-1e-2, 5.0, 500);
        let result = quad.solve();
        assert!(matches!(
            result,
            Err(QuadratureError::BracketCountMismatch {
                expected: 8,
                found: 4
            })
        ));
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let mut quad = LaguerreQuadrature::with_order(0);
        quad.loglevel = Some("off".to_string());
        assert!(matches!(
            quad.solve(),
            Err(QuadratureError::InvalidConfiguration(_))
        ));

        let mut quad = LaguerreQuadrature::with_order(4);
        quad.loglevel = Some("off".to_string());
        quad.set_search_interval(10.0, 10.0, 100);
        assert!(matches!(
            quad.solve(),
            Err(QuadratureError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_division_by_zero_maps_into_quadrature_error() {
        let err: QuadratureError = PolynomialError::DivisionByZero.into();
        assert_eq!(err, QuadratureError::Polynomial(PolynomialError::DivisionByZero));
    }
}
