//! Error handling, configuration, and the command-line front end

/// Command-line interface for evaluating a single distribution
pub mod cli;
/// Numerical constants and command-line defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Console logger installation
pub mod logging;
