//! dense coefficient-vector polynomial arithmetic used by the root finding pipeline
/// evaluation, differentiation and remainder division of dense polynomials
pub mod dense_poly;
/// Sturm sequence construction and sign-change counting
pub mod sturm;
