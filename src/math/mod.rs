//! Arithmetic utilities shared by the distributions

/// Exact factorials, binomial coefficients, and integer powers
pub mod combinatorics;
/// Truncated power series approximations
pub mod series;
