//! Error types for the voxpaint editor

use thiserror::Error;

/// Main error type for the editor
///
/// Recoverable decode conditions (truncated trailing records,
/// out-of-range colors) are not errors; the codec logs them and keeps
/// the valid prefix.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed token: symbol {symbol:?} at position {position} is not in the alphabet")]
    MalformedToken { position: usize, symbol: char },

    #[error("token store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
