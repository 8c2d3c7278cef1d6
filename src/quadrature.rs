//! Gauss-Laguerre quadrature rule assembly
/// the quadrature rule generator: nodes, weights, reporting
pub mod gauss_laguerre;
/// Laguerre polynomial coefficients and closed-form derivative
pub mod laguerre;
