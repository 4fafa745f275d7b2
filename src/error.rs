use std::io;
use thiserror::Error;

/// Error definition for possible errors in this crate
#[derive(Debug, Error)]
pub enum Error {
    /// Represents problems writing driver output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Returned by a block source that has run out of raw words
    #[error("Block source exhausted")]
    Exhausted,
}

/// Alias for Result<T, digitmix::Error>
pub type Result<T> = std::result::Result<T, Error>;
