//! Error types for tsconfig loading operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tsconfig loading operations
pub type Result<T> = std::result::Result<T, TsconfigError>;

/// Fatal faults surfaced by the loader.
///
/// Ordinary misses are not errors: a reference that resolves to nothing
/// yields an absent result, and malformed JSONC degrades to an empty
/// object. Only the conditions below abort a load.
#[derive(Debug, Error)]
pub enum TsconfigError {
    /// A package specifier that module resolution cannot interpret at all
    #[error("invalid specifier '{specifier}': {message}")]
    InvalidSpecifier { specifier: String, message: String },

    /// File system I/O failures other than "not found"
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An `extends` chain looped back onto a file it is already loading
    #[error("cyclic extends chain: {chain}")]
    CyclicExtends { chain: String },
}
