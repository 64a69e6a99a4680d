// third-party imports
use thiserror::Error;

/// Error is an error which may occur when parsing patterns.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern syntax in {pattern:?}: {source}")]
    InvalidPatternSyntax {
        pattern: String,
        source: regex::Error,
    },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
