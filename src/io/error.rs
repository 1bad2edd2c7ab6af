//! Error types for distribution construction and evaluation

use std::fmt;

/// Main error type for all distribution operations
#[derive(Debug)]
pub enum DistributionError {
    /// A defining parameter is outside its valid range
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An outcome lies outside the support of the distribution
    InvalidOutcome {
        /// Short name of the distribution that rejected the outcome
        distribution: &'static str,
        /// The rejected outcome
        outcome: i64,
        /// Description of the support that was violated
        reason: String,
    },

    /// The distribution does not provide the requested operation
    Unsupported {
        /// Short name of the distribution
        distribution: &'static str,
        /// Name of the missing operation
        operation: &'static str,
    },

    /// Numerical computation produced invalid result
    ///
    /// Raised when exact integer arithmetic would overflow its type
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Writing results to the output stream failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Logger installation failed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidOutcome {
                distribution,
                outcome,
                reason,
            } => {
                write!(f, "Outcome x = {outcome} is invalid for {distribution}: {reason}")
            }
            Self::Unsupported {
                distribution,
                operation,
            } => {
                write!(f, "{distribution} does not support {operation}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for DistributionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for distribution results
pub type Result<T> = std::result::Result<T, DistributionError>;

impl From<std::io::Error> for DistributionError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

impl From<log::SetLoggerError> for DistributionError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logging {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DistributionError {
    DistributionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid outcome error
pub fn invalid_outcome(
    distribution: &'static str,
    outcome: i64,
    reason: &impl ToString,
) -> DistributionError {
    DistributionError::InvalidOutcome {
        distribution,
        outcome,
        reason: reason.to_string(),
    }
}

/// Create an unsupported operation error
pub const fn unsupported(distribution: &'static str, operation: &'static str) -> DistributionError {
    DistributionError::Unsupported {
        distribution,
        operation,
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> DistributionError {
    DistributionError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
