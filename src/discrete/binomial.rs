//! Binomial distribution: successes in `n` independent Bernoulli trials

use crate::discrete::bernoulli::Bernoulli;
use crate::discrete::distribution::Distribution;
use crate::io::error::{DistributionError, Result, invalid_outcome};
use crate::math::combinatorics::{binomial_coefficient, ln_binomial_coefficient, power};
use std::fmt;

/// Number of successes in `n` trials that each succeed with the same likelihood
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: u64,
    trial: Bernoulli,
}

impl Binomial {
    /// Create `B(n, likelihood)`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `likelihood` is not a probability
    pub fn new(n: u64, likelihood: f64) -> Result<Self> {
        let trial = Bernoulli::new(likelihood)?;
        let binomial = Self { n, trial };
        log::debug!("Constructing binomial distribution {binomial}");
        Ok(binomial)
    }

    /// Number of trials
    pub const fn n(&self) -> u64 {
        self.n
    }

    /// Per-trial success probability
    pub const fn likelihood(&self) -> f64 {
        self.trial.index()
    }

    /// The single trial the distribution repeats
    pub const fn trial(&self) -> &Bernoulli {
        &self.trial
    }

    /// Mass evaluated as `exp(ln C(n, x) + x ln p + (n - x) ln(1 - p))`
    ///
    /// Used once `C(n, x)` no longer fits in `u128`.
    fn log_space_mass(&self, successes: u64, failures: u64) -> Result<f64> {
        let ln_ways = ln_binomial_coefficient(self.n, successes)?;
        let ln_mass = ln_ways
            + ln_power(self.trial.success(), successes)
            + ln_power(self.trial.failure(), failures);
        Ok(ln_mass.exp())
    }
}

/// `exponent * ln(base)`, with `ln(b^0) = 0` even when `b` is zero
fn ln_power(base: f64, exponent: u64) -> f64 {
    if exponent == 0 {
        0.0
    } else {
        exponent as f64 * base.ln()
    }
}

impl Distribution for Binomial {
    fn name(&self) -> &'static str {
        "Binomial"
    }

    fn p(&self, x: i64) -> Result<f64> {
        let successes = u64::try_from(x)
            .ok()
            .filter(|&k| k <= self.n)
            .ok_or_else(|| {
                invalid_outcome(
                    self.name(),
                    x,
                    &format!("x must satisfy x ∈ {{0, 1, ..., {}}}", self.n),
                )
            })?;
        let failures = self.n - successes;

        let probability = match binomial_coefficient(u128::from(self.n), u128::from(successes)) {
            Ok(ways) => {
                ways as f64
                    * power(self.trial.success(), successes)?
                    * power(self.trial.failure(), failures)?
            }
            Err(DistributionError::Computation { .. }) => {
                self.log_space_mass(successes, failures)?
            }
            Err(error) => return Err(error),
        };

        log::trace!("{self}: p({x}) = {probability}");
        Ok(probability)
    }

    fn mean(&self) -> f64 {
        self.n as f64 * self.likelihood()
    }

    fn variance(&self) -> f64 {
        self.n as f64 * self.trial.variance()
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B({}, {})", self.n, self.likelihood())
    }
}
