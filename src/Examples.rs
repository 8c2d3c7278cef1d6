//! examples of usage of RustedQuadrature
/// Gauss-Laguerre quadrature rule examples
pub mod quadrature_examples;
