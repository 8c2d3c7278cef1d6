//! root isolation and refinement routines
/// bisection root refiner for dense polynomials
pub mod bisection;
/// Sturm-sequence based isolation of polynomial roots into disjoint brackets
pub mod root_isolation;
