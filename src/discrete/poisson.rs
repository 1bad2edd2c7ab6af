//! Poisson distribution for the number of events at a fixed rate

use crate::discrete::distribution::Distribution;
use crate::io::error::{Result, invalid_outcome, invalid_parameter};
use crate::math::series::exp_approx;
use std::fmt;

/// Count of events occurring at rate `λ`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Create `Po(lambda)`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `lambda` is negative or not finite
    pub fn new(lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(invalid_parameter(
                "lambda",
                &lambda,
                &"must be finite and non-negative",
            ));
        }
        let poisson = Self { lambda };
        log::debug!("Constructing Poisson distribution {poisson}");
        Ok(poisson)
    }

    /// Event rate `λ`
    pub const fn rate(&self) -> f64 {
        self.lambda
    }
}

impl Distribution for Poisson {
    fn name(&self) -> &'static str {
        "Poisson"
    }

    /// `e^-λ λ^x / x!`, with `e^-λ` from the series approximation
    ///
    /// `λ^x / x!` is accumulated as the running product of `λ / k`, which stays
    /// finite for any count. Accuracy follows `exp_approx`: relative error is
    /// below `1e-12` for `λ <= 40` and degrades for larger rates.
    fn p(&self, x: i64) -> Result<f64> {
        let events = u64::try_from(x)
            .map_err(|_negative| invalid_outcome(self.name(), x, &"x must be non-negative"))?;

        let mut weight = 1.0;
        for k in 1..=events {
            weight *= self.lambda / k as f64;
            if weight < f64::MIN_POSITIVE {
                break;
            }
        }
        let probability = exp_approx(-self.lambda) * weight;

        log::trace!("{self}: p({x}) = {probability}");
        Ok(probability)
    }

    fn mean(&self) -> f64 {
        self.lambda
    }

    fn variance(&self) -> f64 {
        self.lambda
    }
}

impl fmt::Display for Poisson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Po({})", self.lambda)
    }
}
