//! Uniform interface over the discrete distribution family

use crate::io::error::{Result, unsupported};
use std::fmt;

/// A discrete distribution that can be queried for probabilities
///
/// The trait is object safe, so heterogeneous distributions can be held as
/// `Box<dyn Distribution>`. The `Display` rendering is diagnostic only.
pub trait Distribution: fmt::Display {
    /// Short name used in error messages
    fn name(&self) -> &'static str;

    /// Probability mass `P(X = x)`
    ///
    /// # Errors
    ///
    /// Returns an invalid outcome error if `x` is outside the support
    fn p(&self, x: i64) -> Result<f64>;

    /// Cumulative probability `P(X <= x)`
    ///
    /// # Errors
    ///
    /// Returns an unsupported error unless the distribution provides it
    fn cdf(&self, _x: i64) -> Result<f64> {
        Err(unsupported(self.name(), "cdf"))
    }

    /// Expected value
    fn mean(&self) -> f64;

    /// Variance
    fn variance(&self) -> f64;
}
