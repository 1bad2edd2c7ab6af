//! Command-line interface for evaluating one probability of one distribution

use crate::discrete::{Bernoulli, Binomial, Distribution, Geometric, Poisson, Uniform};
use crate::io::configuration::DEFAULT_UNIFORM_LOWER;
use crate::io::error::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io::Write;

#[derive(Parser)]
#[command(name = "pmodels")]
#[command(
    author,
    version,
    about = "Evaluate probabilities of discrete random variables"
)]
/// Command-line arguments for a single evaluation
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Evaluate the cumulative probability P(X <= x) instead of P(X = x)
    #[arg(short, long, global = true)]
    pub cumulative: bool,

    /// Distribution to evaluate
    #[command(subcommand)]
    pub model: Model,
}

/// Distribution parameters and the outcome to evaluate
#[derive(Subcommand)]
pub enum Model {
    /// Single success/failure trial
    Bernoulli {
        /// Success probability
        #[arg(long)]
        index: f64,
        /// Outcome (0 or 1)
        #[arg(allow_negative_numbers = true)]
        x: i64,
    },

    /// Successes in a fixed number of trials
    Binomial {
        /// Number of trials
        #[arg(short = 'n', long)]
        trials: u64,
        /// Per-trial success probability
        #[arg(long)]
        likelihood: f64,
        /// Number of successes
        #[arg(allow_negative_numbers = true)]
        x: i64,
    },

    /// Trial number of the first success
    Geometric {
        /// Per-trial success probability
        #[arg(long)]
        likelihood: f64,
        /// Trial number
        #[arg(allow_negative_numbers = true)]
        x: i64,
    },

    /// Event count at a fixed rate
    Poisson {
        /// Event rate
        #[arg(long)]
        rate: f64,
        /// Number of events
        #[arg(allow_negative_numbers = true)]
        x: i64,
    },

    /// Flat mass over an integer range
    Uniform {
        /// Upper bound of the range
        #[arg(long, allow_negative_numbers = true)]
        upper: i64,
        /// Lower bound of the range (0 or 1)
        #[arg(long, default_value_t = DEFAULT_UNIFORM_LOWER, allow_negative_numbers = true)]
        lower: i64,
        /// Outcome
        #[arg(allow_negative_numbers = true)]
        x: i64,
    },
}

impl Model {
    /// Construct the distribution described by these arguments
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the distribution rejects its parameters
    pub fn build(&self) -> Result<Box<dyn Distribution>> {
        let distribution: Box<dyn Distribution> = match *self {
            Self::Bernoulli { index, .. } => Box::new(Bernoulli::new(index)?),
            Self::Binomial {
                trials, likelihood, ..
            } => Box::new(Binomial::new(trials, likelihood)?),
            Self::Geometric { likelihood, .. } => Box::new(Geometric::new(likelihood)?),
            Self::Poisson { rate, .. } => Box::new(Poisson::new(rate)?),
            Self::Uniform { upper, lower, .. } => Box::new(Uniform::new(upper, lower)?),
        };
        Ok(distribution)
    }

    /// Outcome to evaluate
    pub const fn outcome(&self) -> i64 {
        match *self {
            Self::Bernoulli { x, .. }
            | Self::Binomial { x, .. }
            | Self::Geometric { x, .. }
            | Self::Poisson { x, .. }
            | Self::Uniform { x, .. } => x,
        }
    }
}

impl Cli {
    /// Log level selected by the number of `-v` flags
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Evaluate the requested probability and write one result line to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or outcome are invalid, if the
    /// distribution has no cumulative function, or if writing fails
    pub fn execute(&self, out: &mut impl Write) -> Result<f64> {
        let distribution = self.model.build()?;
        let x = self.model.outcome();

        let (label, value) = if self.cumulative {
            ("F", distribution.cdf(x)?)
        } else {
            ("p", distribution.p(x)?)
        };

        log::info!("Evaluated {label}({x}) of {distribution}");
        writeln!(out, "{distribution} {label}({x}) = {value}")?;
        Ok(value)
    }
}
