use thiserror::Error;

/// Errors surfaced by [`crate::selection::sort`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("input sequence must not be absent")]
    MissingInput,
}

/// A command line value that does not name a known choice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown algorithm `{0}` (use standard|double)")]
    UnknownVariant(String),

    #[error("unknown mode `{0}` (use random|sorted|reversed|duplicates)")]
    UnknownMode(String),
}
