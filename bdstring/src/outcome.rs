/// What a lenient `StrBuf` operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation was carried out in full.
    Applied,
    /// The buffer was left untouched.
    Ignored(NoOpReason),
    /// The operation was carried out, but content was cut off.
    Truncated {
        /// Bytes that would have been stored without the cut
        produced: usize,
        /// Bytes actually stored
        kept: usize,
    },
}

impl Outcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }

    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

/// Why an operation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// `start` is past `end`
    InvertedRange,
    /// `start` is past the content
    StartOutOfRange,
    /// `end` is past the content
    EndOutOfRange,
    /// A formatting trait implementation returned an error
    FormatError,
}
