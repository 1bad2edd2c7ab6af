//! Probability mass functions for a small family of discrete random variables
//!
//! Each distribution is an immutable value validated at construction and
//! queried through the [`Distribution`] trait. Evaluation is pure arithmetic
//! with no shared state, so instances can be used from any thread.

#![forbid(unsafe_code)]

/// Discrete distributions and the capability trait they implement
pub mod discrete;
/// Error handling, configuration, logging, and the command-line interface
pub mod io;
/// Factorials, binomial coefficients, powers, and the exponential series
pub mod math;

pub use discrete::{Bernoulli, Binomial, Distribution, Geometric, Poisson, Uniform};
pub use io::error::{DistributionError, Result};
