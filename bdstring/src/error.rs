use thiserror::Error;

/// Error types for the strict (`try_*`) `StrBuf` operations
///
/// The lenient operations never fail; they report what happened through
/// [`Outcome`](crate::Outcome) instead.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StrBufError {
    /// A capacity of zero leaves no room for the terminator byte
    #[error("Zero capacity: a buffer needs at least one byte for the terminator")]
    ZeroCapacity,
    /// Requested capacity cannot hold the current content plus terminator
    #[error("Capacity too small: requested {requested} bytes, but content is {length} bytes")]
    CapacityBelowLength {
        /// Capacity that was requested
        requested: usize,
        /// Current content length
        length: usize,
    },
    /// Range is inverted or reaches past the current content
    #[error("Invalid range: {start}..{end} for content of length {length}")]
    InvalidRange {
        /// Start of the requested range
        start: usize,
        /// End of the requested range (exclusive)
        end: usize,
        /// Current content length
        length: usize,
    },
    /// Formatted output does not fit the staging area
    #[error("Formatted output truncated: produced {produced} bytes, staging limit is {limit}")]
    Truncated {
        /// Number of bytes the formatting produced
        produced: usize,
        /// Staging area size, including the terminator byte
        limit: usize,
    },
    /// A formatting trait implementation returned an error
    #[error("Formatting failed")]
    Format,
}
