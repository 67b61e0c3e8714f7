use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::error::StrBufError;
use crate::options::{BufferOptions, FormatLimit, DEFAULT_CAPACITY, HEADROOM};
use crate::outcome::{NoOpReason, Outcome};
use crate::staging::Staging;
use crate::trace_compat::{debug, trace};

/// Length of a zero-terminated byte sequence: the offset of the first zero
/// byte, or the whole slice if there is none.
#[must_use]
pub fn text_len(text: &[u8]) -> usize {
    text.iter().position(|&b| b == 0).unwrap_or(text.len())
}

/// A growable byte string that tracks its length and keeps a zero byte after
/// the content.
///
/// `data.len()` is the capacity. Invariants held after every public call:
/// - `len < data.len()`
/// - `data[len] == 0`
/// - `data[data.len() - 1] == 0`
pub struct StrBuf {
    data: Vec<u8>,
    len: usize,
    options: BufferOptions,
}

impl StrBuf {
    /// Creates an empty buffer with the default capacity (64 bytes).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty, zero-filled buffer of exactly `capacity` bytes.
    ///
    /// A capacity of 0 leaves no room for the terminator and is raised to 1.
    /// Use [`StrBuf::try_with_capacity`] to reject it instead.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(capacity, BufferOptions::default())
    }

    /// Creates an empty buffer of exactly `capacity` bytes (at least 1) with
    /// the given options.
    #[must_use]
    pub fn with_options(capacity: usize, options: BufferOptions) -> Self {
        Self {
            data: vec![0; capacity.max(1)],
            len: 0,
            options,
        }
    }

    /// Creates an empty buffer of exactly `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::ZeroCapacity` if `capacity` is 0.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StrBufError> {
        if capacity == 0 {
            return Err(StrBufError::ZeroCapacity);
        }
        Ok(Self::with_capacity(capacity))
    }

    /// Creates a buffer holding `text` up to its first zero byte, with 8
    /// bytes of headroom. Empty text gives the same buffer as [`StrBuf::new`].
    #[must_use]
    pub fn from_bytes(text: &[u8]) -> Self {
        let n = text_len(text);
        if n == 0 {
            return Self::new();
        }
        let mut buf = Self::with_capacity(n + HEADROOM);
        buf.data[..n].copy_from_slice(&text[..n]);
        buf.len = n;
        buf
    }

    /// Like [`StrBuf::from_bytes`], with absent text treated as empty.
    #[must_use]
    pub fn from_text(text: Option<&[u8]>) -> Self {
        text.map_or_else(Self::new, Self::from_bytes)
    }

    /// Copies `source` into a new buffer sized to its content plus headroom.
    /// An absent source gives the same buffer as [`StrBuf::new`].
    #[must_use]
    pub fn duplicate(source: Option<&StrBuf>) -> Self {
        source.map_or_else(Self::new, StrBuf::clone)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn options(&self) -> BufferOptions {
        self.options
    }

    pub fn set_options(&mut self, options: BufferOptions) {
        self.options = options;
    }

    /// The content, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The content followed by its terminator byte.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.len]
    }

    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// Writable raw storage: every byte except the last one, which stays
    /// reserved for a terminator.
    ///
    /// After writing, call [`StrBuf::refresh_len`] so the tracked length
    /// matches the new content.
    pub fn raw_mut(&mut self) -> &mut [u8] {
        let end = self.data.len() - 1;
        &mut self.data[..end]
    }

    /// Recomputes the length by scanning for the first zero byte.
    pub fn refresh_len(&mut self) {
        self.len = text_len(&self.data);
    }

    /// Reallocates to exactly `capacity` bytes, keeping existing bytes up to
    /// the smaller of the old and new capacity.
    ///
    /// A capacity of 0 is raised to 1. If the content no longer fits, it is
    /// cut to `capacity - 1` bytes and `Outcome::Truncated` is returned; use
    /// [`StrBuf::try_resize`] to reject that instead.
    pub fn resize(&mut self, capacity: usize) -> Outcome {
        let capacity = capacity.max(1);
        self.reallocate(capacity);
        if self.len < capacity {
            return Outcome::Applied;
        }
        let produced = self.len;
        self.len = capacity - 1;
        debug!(produced, kept = self.len, "content cut by resize");
        Outcome::Truncated {
            produced,
            kept: self.len,
        }
    }

    /// Reallocates to exactly `capacity` bytes.
    ///
    /// # Errors
    ///
    /// - `StrBufError::ZeroCapacity` if `capacity` is 0
    /// - `StrBufError::CapacityBelowLength` if the content and its terminator
    ///   would not fit
    pub fn try_resize(&mut self, capacity: usize) -> Result<(), StrBufError> {
        if capacity == 0 {
            return Err(StrBufError::ZeroCapacity);
        }
        if capacity <= self.len {
            return Err(StrBufError::CapacityBelowLength {
                requested: capacity,
                length: self.len,
            });
        }
        self.reallocate(capacity);
        Ok(())
    }

    fn reallocate(&mut self, capacity: usize) {
        let old = self.data.len();
        trace!(from = old, to = capacity, "reallocating");
        if capacity > old {
            self.data.reserve_exact(capacity - old);
            self.data.resize(capacity, 0);
        } else {
            self.data.truncate(capacity);
            self.data.shrink_to_fit();
        }
        self.data[capacity - 1] = 0;
    }

    /// Makes room for `required_len` content bytes plus the terminator.
    fn reserve_for(&mut self, required_len: usize) {
        if self.data.len() <= required_len {
            let capacity = self
                .options
                .growth
                .grown_capacity(self.data.len(), required_len);
            self.reallocate(capacity);
        }
    }

    /// Empties the buffer, keeping its capacity.
    pub fn clear(&mut self) {
        self.len = 0;
        self.data[0] = 0;
    }

    /// Replaces the content with `text` up to its first zero byte.
    pub fn set(&mut self, text: &[u8]) {
        let n = text_len(text);
        self.assign(&text[..n]);
    }

    /// Replaces the content with `other`'s content.
    pub fn copy_from(&mut self, other: &StrBuf) {
        self.assign(other.as_bytes());
    }

    /// Appends `other`'s content.
    pub fn concat(&mut self, other: &StrBuf) {
        self.extend(other.as_bytes());
    }

    /// Appends `text` up to its first zero byte.
    pub fn append_raw(&mut self, text: &[u8]) {
        let n = text_len(text);
        self.extend(&text[..n]);
    }

    fn assign(&mut self, bytes: &[u8]) {
        let n = bytes.len();
        self.reserve_for(n);
        self.data[..n].copy_from_slice(bytes);
        self.data[n] = 0;
        self.len = n;
    }

    fn extend(&mut self, bytes: &[u8]) {
        let new_len = self.len + bytes.len();
        self.reserve_for(new_len);
        self.data[self.len..new_len].copy_from_slice(bytes);
        self.data[new_len] = 0;
        self.len = new_len;
    }

    /// Keeps only the bytes in `start..end`, moved to the front.
    ///
    /// An inverted range or one reaching past the content leaves the buffer
    /// untouched and is reported as `Outcome::Ignored`.
    pub fn slice(&mut self, start: usize, end: usize) -> Outcome {
        let reason = if start > end {
            Some(NoOpReason::InvertedRange)
        } else if start > self.len {
            Some(NoOpReason::StartOutOfRange)
        } else if end > self.len {
            Some(NoOpReason::EndOutOfRange)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(start, end, len = self.len, ?reason, "slice ignored");
            return Outcome::Ignored(reason);
        }

        let n = end - start;
        self.data.copy_within(start..end, 0);
        self.data[n] = 0;
        self.len = n;
        Outcome::Applied
    }

    /// Keeps only the bytes in `start..end`, moved to the front.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::InvalidRange` if `start > end` or either bound is
    /// past the content. The buffer is left untouched.
    pub fn try_slice(&mut self, start: usize, end: usize) -> Result<(), StrBufError> {
        let len = self.len;
        match self.slice(start, end) {
            Outcome::Ignored(_) => Err(StrBufError::InvalidRange {
                start,
                end,
                length: len,
            }),
            _ => Ok(()),
        }
    }

    pub fn make_ascii_lowercase(&mut self) {
        self.data[..self.len].make_ascii_lowercase();
    }

    pub fn make_ascii_uppercase(&mut self) {
        self.data[..self.len].make_ascii_uppercase();
    }

    fn stage(&self, args: fmt::Arguments<'_>) -> Option<Staging> {
        let limit = match self.options.format_limit {
            FormatLimit::Staged(size) => Some(size),
            FormatLimit::Unbounded => None,
        };
        Staging::render(limit, args)
    }

    fn staged_outcome(staging: &Staging) -> Outcome {
        if staging.is_truncated() {
            let kept = staging.as_bytes().len();
            debug!(produced = staging.produced(), kept, "formatted output truncated");
            Outcome::Truncated {
                produced: staging.produced(),
                kept,
            }
        } else {
            Outcome::Applied
        }
    }

    fn check_staged(&self, staging: &Staging) -> Result<(), StrBufError> {
        match self.options.format_limit {
            FormatLimit::Staged(limit) if staging.is_truncated() => Err(StrBufError::Truncated {
                produced: staging.produced(),
                limit,
            }),
            _ => Ok(()),
        }
    }

    /// Replaces the content with formatted output.
    ///
    /// With the default `FormatLimit::Staged(4096)`, output beyond 4095 bytes
    /// is cut off and `Outcome::Truncated` is returned. As with
    /// [`StrBuf::set`], the output is taken up to its first zero byte.
    pub fn format_into(&mut self, args: fmt::Arguments<'_>) -> Outcome {
        let Some(staging) = self.stage(args) else {
            return Outcome::Ignored(NoOpReason::FormatError);
        };
        self.set(staging.as_bytes());
        Self::staged_outcome(&staging)
    }

    /// Appends formatted output, with the same bound as
    /// [`StrBuf::format_into`].
    pub fn append_formatted(&mut self, args: fmt::Arguments<'_>) -> Outcome {
        let Some(staging) = self.stage(args) else {
            return Outcome::Ignored(NoOpReason::FormatError);
        };
        self.append_raw(staging.as_bytes());
        Self::staged_outcome(&staging)
    }

    /// Replaces the content with formatted output.
    ///
    /// # Errors
    ///
    /// - `StrBufError::Truncated` if the output does not fit the staging area
    /// - `StrBufError::Format` if a formatting trait fails
    ///
    /// The buffer is left untouched on error.
    pub fn try_format_into(&mut self, args: fmt::Arguments<'_>) -> Result<(), StrBufError> {
        let staging = self.stage(args).ok_or(StrBufError::Format)?;
        self.check_staged(&staging)?;
        self.set(staging.as_bytes());
        Ok(())
    }

    /// Appends formatted output.
    ///
    /// # Errors
    ///
    /// Same as [`StrBuf::try_format_into`].
    pub fn try_append_formatted(&mut self, args: fmt::Arguments<'_>) -> Result<(), StrBufError> {
        let staging = self.stage(args).ok_or(StrBufError::Format)?;
        self.check_staged(&staging)?;
        self.append_raw(staging.as_bytes());
        Ok(())
    }

    /// Compares the content with `text` up to its first zero byte.
    #[must_use]
    pub fn eq_text(&self, text: &[u8]) -> bool {
        self.as_bytes() == &text[..text_len(text)]
    }

    /// Frees the buffer. Same as dropping it.
    pub fn release(self) {}
}

/// Content equality. An absent buffer is never equal to anything, not even
/// another absent buffer.
#[must_use]
pub fn equals(a: Option<&StrBuf>, b: Option<&StrBuf>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Compares a buffer with zero-terminated text. Absent on either side is never
/// equal.
#[must_use]
pub fn equals_text(a: Option<&StrBuf>, text: Option<&[u8]>) -> bool {
    match (a, text) {
        (Some(a), Some(text)) => a.eq_text(text),
        _ => false,
    }
}

/// Frees a buffer if there is one.
pub fn release(buf: Option<StrBuf>) {
    if let Some(buf) = buf {
        buf.release();
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StrBuf {
    /// The copy is sized to the content plus headroom, not to the source
    /// capacity.
    fn clone(&self) -> Self {
        let mut buf = Self::with_options(self.len + HEADROOM, self.options);
        buf.data[..self.len].copy_from_slice(self.as_bytes());
        buf.len = self.len;
        buf
    }
}

impl PartialEq for StrBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StrBuf {}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrBuf")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("content", &self.as_bstr())
            .finish()
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

/// Appends without a staging bound, growing as needed.
impl fmt::Write for StrBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend(s.as_bytes());
        Ok(())
    }
}

impl AsRef<[u8]> for StrBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for StrBuf {
    fn from(text: &[u8]) -> Self {
        Self::from_bytes(text)
    }
}

impl From<&str> for StrBuf {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}
