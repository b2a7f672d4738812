//! Configuration error types

use thiserror::Error;

/// Errors raised while building a search configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// N-gram window must hold at least one character
    #[error("invalid n-gram size: {0} (must be at least 1)")]
    InvalidNgramSize(usize),

    /// Threshold outside [0.0, 1.0], or NaN
    #[error("invalid similarity threshold: {0} (must be within 0.0..=1.0)")]
    InvalidThreshold(f64),

    /// Unknown similarity metric name
    #[error("unknown similarity metric: '{0}' (expected 'jaccard' or 'dice')")]
    InvalidMetric(String),

    /// Serialized configuration could not be parsed
    #[error("config parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
