//! Geometric distribution: the trial on which the first success occurs
//!
//! With success probability `p` on every independent trial, the first success
//! lands on trial `x` exactly when the `x - 1` trials before it fail:
//!
//! ```text
//! P(X = 1) = p
//! P(X = 2) = (1 - p) p
//! P(X = x) = (1 - p)^(x - 1) p
//! ```
//!
//! At most `x` trials are needed unless all of the first `x` fail, so
//! `P(X <= x) = 1 - (1 - p)^x`.

use crate::discrete::bernoulli::Bernoulli;
use crate::discrete::distribution::Distribution;
use crate::io::error::{Result, invalid_outcome};
use crate::math::combinatorics::power;
use std::fmt;

/// Trial number of the first success in a sequence of Bernoulli trials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    trial: Bernoulli,
}

impl Geometric {
    /// Create `G(likelihood)`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `likelihood` is not a probability
    pub fn new(likelihood: f64) -> Result<Self> {
        let trial = Bernoulli::new(likelihood)?;
        let geometric = Self { trial };
        log::debug!("Constructing geometric distribution {geometric}");
        Ok(geometric)
    }

    /// Per-trial success probability
    pub const fn likelihood(&self) -> f64 {
        self.trial.index()
    }

    /// The trial that is repeated until it succeeds
    pub const fn trial(&self) -> &Bernoulli {
        &self.trial
    }
}

impl Distribution for Geometric {
    fn name(&self) -> &'static str {
        "Geometric"
    }

    fn p(&self, x: i64) -> Result<f64> {
        let failures = u64::try_from(x)
            .ok()
            .and_then(|trials| trials.checked_sub(1))
            .ok_or_else(|| {
                invalid_outcome(self.name(), x, &"x must be a positive trial number")
            })?;

        let probability = power(self.trial.failure(), failures)? * self.trial.success();

        log::trace!("{self}: p({x}) = {probability}");
        Ok(probability)
    }

    fn cdf(&self, x: i64) -> Result<f64> {
        let trials = u64::try_from(x)
            .map_err(|_negative| invalid_outcome(self.name(), x, &"x must be non-negative"))?;

        let probability = 1.0 - power(self.trial.failure(), trials)?;

        log::trace!("{self}: F({x}) = {probability}");
        Ok(probability)
    }

    fn mean(&self) -> f64 {
        self.likelihood().recip()
    }

    fn variance(&self) -> f64 {
        self.trial.failure() / (self.likelihood() * self.likelihood())
    }
}

impl fmt::Display for Geometric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G({})", self.likelihood())
    }
}
