/// Capacity of a buffer created with [`StrBuf::new`](crate::StrBuf::new).
pub const DEFAULT_CAPACITY: usize = 64;

/// Extra bytes added beyond the exact required size when growing.
pub const HEADROOM: usize = 8;

/// Size of the formatting staging area, terminator included.
pub const FORMAT_STAGING_SIZE: usize = 4096;

/// How a buffer computes its new capacity when content no longer fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// Grow to exactly the required length plus a fixed number of bytes.
    ///
    /// Repeated small appends reallocate often, but peak memory stays close
    /// to the content size.
    Headroom(usize),
    /// Grow to at least twice the current capacity.
    Doubling,
}

impl Default for Growth {
    fn default() -> Self {
        Growth::Headroom(HEADROOM)
    }
}

impl Growth {
    /// Capacity to reallocate to so that `required_len` content bytes plus the
    /// terminator fit.
    #[must_use]
    pub fn grown_capacity(self, current: usize, required_len: usize) -> usize {
        match self {
            // Headroom of zero would leave no room for the terminator
            Growth::Headroom(headroom) => required_len + headroom.max(1),
            Growth::Doubling => current.saturating_mul(2).max(required_len + 1),
        }
    }
}

/// Bound applied to formatted output before it reaches the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatLimit {
    /// Render through a staging area of this many bytes. Output beyond
    /// `size - 1` bytes is cut off.
    Staged(usize),
    /// Render everything and grow the buffer to fit.
    Unbounded,
}

impl Default for FormatLimit {
    fn default() -> Self {
        FormatLimit::Staged(FORMAT_STAGING_SIZE)
    }
}

/// Configuration for a [`StrBuf`](crate::StrBuf).
///
/// ```rust
/// use bdstring::{BufferOptions, FormatLimit, Growth, StrBuf};
///
/// let options = BufferOptions {
///     growth: Growth::Doubling,
///     format_limit: FormatLimit::Unbounded,
/// };
/// let buf = StrBuf::with_options(16, options);
/// assert_eq!(buf.capacity(), 16);
/// ```
///
/// # Default
///
/// `Growth::Headroom(8)` and `FormatLimit::Staged(4096)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferOptions {
    /// Growth policy used by every operation that may need more room.
    pub growth: Growth,
    /// Bound for `format_into` and `append_formatted`.
    pub format_limit: FormatLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headroom_growth() {
        assert_eq!(Growth::default().grown_capacity(13, 20), 28);
        assert_eq!(Growth::Headroom(0).grown_capacity(13, 20), 21);
    }

    #[test]
    fn test_doubling_growth() {
        assert_eq!(Growth::Doubling.grown_capacity(16, 20), 32);
        assert_eq!(Growth::Doubling.grown_capacity(16, 40), 41);
        assert_eq!(Growth::Doubling.grown_capacity(1, 1), 2);
    }

    #[test]
    fn test_default_options() {
        let options = BufferOptions::default();
        assert_eq!(options.growth, Growth::Headroom(8));
        assert_eq!(options.format_limit, FormatLimit::Staged(4096));
    }
}
