//! Numerical constants and command-line defaults

/// Highest power included in the exponential series (terms k = 0..=N)
pub const EXP_SERIES_TERMS: u32 = 100;

/// Lower bound used by the uniform model when none is given
pub const DEFAULT_UNIFORM_LOWER: i64 = 1;

// Logging settings
/// Pattern for console log lines
pub const LOG_PATTERN: &str = "[{h({l})} - {M}] {m}{n}";
/// Name of the console appender
pub const LOG_APPENDER: &str = "stderr";
