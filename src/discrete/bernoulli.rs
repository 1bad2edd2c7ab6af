//! Bernoulli distribution over the outcomes `{0, 1}`

use crate::discrete::distribution::Distribution;
use crate::io::error::{Result, invalid_outcome, invalid_parameter};
use std::fmt;

/// Single trial that succeeds with probability `index`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    index: f64,
}

impl Bernoulli {
    /// Create a Bernoulli trial with success probability `index`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `index` is not a finite value in `[0, 1]`
    pub fn new(index: f64) -> Result<Self> {
        validate_probability("index", index)?;
        let bernoulli = Self { index };
        log::debug!("Constructing Bernoulli distribution {bernoulli}");
        Ok(bernoulli)
    }

    /// Success probability
    pub const fn index(&self) -> f64 {
        self.index
    }

    /// Probability of the outcome `1`
    pub const fn success(&self) -> f64 {
        self.index
    }

    /// Probability of the outcome `0`
    pub fn failure(&self) -> f64 {
        1.0 - self.index
    }
}

/// Check that `value` is a finite probability
///
/// # Errors
///
/// Returns an invalid parameter error naming `parameter` if the check fails
pub(crate) fn validate_probability(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a real number between 0 and 1",
        ))
    }
}

impl Distribution for Bernoulli {
    fn name(&self) -> &'static str {
        "Bernoulli"
    }

    fn p(&self, x: i64) -> Result<f64> {
        let probability = match x {
            0 => self.failure(),
            1 => self.success(),
            _ => return Err(invalid_outcome(self.name(), x, &"x must be 0 or 1")),
        };
        log::trace!("{self}: p({x}) = {probability}");
        Ok(probability)
    }

    fn mean(&self) -> f64 {
        self.index
    }

    fn variance(&self) -> f64 {
        self.index * self.failure()
    }
}

impl fmt::Display for Bernoulli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bernoulli({})", self.index)
    }
}
