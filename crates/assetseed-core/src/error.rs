use thiserror::Error;

/// Core error type shared across assetseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A vocabulary was requested with an unusable size.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

/// Convenience alias for results returned by assetseed crates.
pub type Result<T> = std::result::Result<T, Error>;
