//! Discrete uniform distribution over `m..=n`

use crate::discrete::distribution::Distribution;
use crate::io::error::{Result, invalid_outcome, invalid_parameter};
use std::fmt;

/// Equal mass on every integer from the lower bound `m` to the upper bound `n`
///
/// The lower bound is either 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uniform {
    n: i64,
    m: i64,
}

impl Uniform {
    /// Create `U(m, n)`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `m` is not 0 or 1, or if `n < m`
    pub fn new(n: i64, m: i64) -> Result<Self> {
        if m != 0 && m != 1 {
            return Err(invalid_parameter("m", &m, &"must be 0 or 1"));
        }
        if n < m {
            return Err(invalid_parameter(
                "n",
                &n,
                &format!("must be at least the lower bound {m}"),
            ));
        }
        let uniform = Self { n, m };
        log::debug!("Constructing uniform distribution {uniform}");
        Ok(uniform)
    }

    /// Largest outcome `n`
    pub const fn upper(&self) -> i64 {
        self.n
    }

    /// Smallest outcome `m`
    pub const fn lower(&self) -> i64 {
        self.m
    }

    /// Number of outcomes in the support
    fn width(&self) -> f64 {
        (self.n - self.m) as f64 + 1.0
    }
}

impl Distribution for Uniform {
    fn name(&self) -> &'static str {
        "Uniform"
    }

    fn p(&self, x: i64) -> Result<f64> {
        if x < self.m || x > self.n {
            return Err(invalid_outcome(
                self.name(),
                x,
                &format!("x must satisfy {} <= x <= {}", self.m, self.n),
            ));
        }
        let probability = self.width().recip();

        log::trace!("{self}: p({x}) = {probability}");
        Ok(probability)
    }

    fn mean(&self) -> f64 {
        (self.m as f64 + self.n as f64) / 2.0
    }

    fn variance(&self) -> f64 {
        let width = self.width();
        (width * width - 1.0) / 12.0
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U({}, {})", self.m, self.n)
    }
}
