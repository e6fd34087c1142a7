//! Error types for `jcol`.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Malformed input lines
//! are never errors; they take the fallback path in [`crate::projector`].

use thiserror::Error;

/// Errors that can occur in `jcol`.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml) →
/// exit 1, [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum JcolError {
    /// Configuration error (empty column list, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Operation the column scheme does not provide (timeshift, push-back).
    #[error("{0} is not supported by this column scheme")]
    Unsupported(&'static str),
}

impl JcolError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) | Self::Unsupported(_) => 1,
            Self::Io(_) => 2,
        }
    }
}
