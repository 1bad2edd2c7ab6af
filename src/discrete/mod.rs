//! Discrete random variables and their probability functions
//!
//! Every distribution is an immutable value validated at construction:
//! - `Bernoulli` for a single success/failure trial
//! - `Binomial` and `Geometric`, both built on an owned `Bernoulli`
//! - `Poisson` for event counts at a fixed rate
//! - `Uniform` over a contiguous integer range

/// Single-trial success/failure distribution
pub mod bernoulli;
/// Number of successes in a fixed number of trials
pub mod binomial;
/// Capability shared by all discrete distributions
pub mod distribution;
/// Trial number of the first success
pub mod geometric;
/// Event counts at a fixed rate
pub mod poisson;
/// Flat mass over an integer range
pub mod uniform;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use distribution::Distribution;
pub use geometric::Geometric;
pub use poisson::Poisson;
pub use uniform::Uniform;
