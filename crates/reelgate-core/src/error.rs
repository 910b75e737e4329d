use thiserror::Error;

/// Errors that can occur while building a Reelgate engine.
///
/// Classification, size parsing and comparison are infallible; only
/// constructing an engine from a custom configuration can fail.
#[derive(Debug, Error)]
pub enum ReelgateError {
    /// A rank table contains a token that is empty or whitespace-only.
    #[error("rank table {table:?} contains an empty token")]
    EmptyToken {
        /// Name of the offending table.
        table: &'static str,
    },

    /// The configuration is structurally valid but semantically unusable.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A JSON configuration document could not be decoded.
    #[error("failed to parse engine configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for Reelgate operations.
pub type Result<T> = std::result::Result<T, ReelgateError>;
