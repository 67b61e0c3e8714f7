#![no_std]

//! `StrBuf`: a growable byte string that tracks its length and capacity and
//! always keeps a zero terminator after its content.
//!
//! Content is raw bytes. Text handed in from outside (`set`, `append_raw`,
//! `from_bytes`, `eq_text`) is read up to its first zero byte, the same way a
//! C string is measured.
//!
//! Buffer layout: `[content][0][unused bytes...][0]`
//!
//! - `len()` bytes of content, followed by the terminator
//! - `capacity()` is the total size of the block; the last byte is always 0
//!
//! # Growth
//!
//! When content no longer fits, the buffer reallocates to the required size
//! plus 8 bytes of headroom. This can be changed to doubling through
//! [`BufferOptions`]:
//!
//! ```
//! # use bdstring::StrBuf;
//! let mut buf = StrBuf::from_bytes(b"Hello");
//! assert_eq!(buf.capacity(), 13);
//!
//! buf.append_raw(b", World");
//! assert_eq!(buf.as_bytes(), b"Hello, World");
//! assert_eq!(buf.capacity(), 13);
//!
//! buf.append_raw(b"!");
//! assert_eq!(buf.capacity(), 21);
//! ```
//!
//! Clearing keeps the capacity, so a buffer can be refilled without
//! reallocating.
//!
//! # Formatting
//!
//! `format_into` and `append_formatted` (or the [`bds_format!`] and
//! [`bds_append!`] macros) render through a 4096-byte staging area. Output
//! beyond 4095 bytes is cut off, and the returned [`Outcome`] says so:
//!
//! ```
//! # use bdstring::{bds_append, bds_format, Outcome, StrBuf};
//! let mut buf = StrBuf::new();
//! bds_format!(buf, "{} {}", "Hello", "World");
//! bds_append!(buf, ", {}", "Hello Earth");
//! assert_eq!(buf.as_bytes(), b"Hello World, Hello Earth");
//!
//! let long = "x".repeat(5000);
//! assert_eq!(
//!     bds_format!(buf, "{long}"),
//!     Outcome::Truncated { produced: 5000, kept: 4095 }
//! );
//! ```
//!
//! Set `FormatLimit::Unbounded` to grow instead of truncating. `StrBuf` also
//! implements `core::fmt::Write`, which appends without any bound.
//!
//! # Lenient and strict operations
//!
//! Malformed ranges are ignored rather than reported as errors. The
//! [`Outcome`] returned by those operations tells what happened, and the
//! `try_*` variants turn misuse into [`StrBufError`]:
//!
//! ```
//! # use bdstring::{NoOpReason, Outcome, StrBuf, StrBufError};
//! let mut buf = StrBuf::from_bytes(b"Hello");
//! assert_eq!(buf.slice(3, 1), Outcome::Ignored(NoOpReason::InvertedRange));
//! assert_eq!(buf.as_bytes(), b"Hello");
//!
//! assert_eq!(
//!     buf.try_slice(1, 9),
//!     Err(StrBufError::InvalidRange { start: 1, end: 9, length: 5 })
//! );
//! buf.try_slice(1, 4).unwrap();
//! assert_eq!(buf.as_bytes(), b"ell");
//! ```
//!
//! # Raw access
//!
//! The storage can be written directly. Call `refresh_len` afterwards:
//!
//! ```
//! # use bdstring::StrBuf;
//! let mut buf = StrBuf::from_bytes(b"Hello");
//! buf.raw_mut()[..12].copy_from_slice(b"Hello Earth\0");
//! buf.refresh_len();
//! assert_eq!(buf.len(), 11);
//! ```
//!
//! # Features
//!
//! - `std`: implements `std::error::Error` for [`StrBufError`]
//! - `tracing`: emits reallocation and truncation events through `tracing`

extern crate alloc;

#[cfg(test)]
extern crate std;

mod core;
mod error;
mod options;
mod outcome;
mod staging;
mod trace_compat;

pub use crate::core::{equals, equals_text, release, text_len, StrBuf};
pub use error::StrBufError;
pub use options::{BufferOptions, FormatLimit, Growth, DEFAULT_CAPACITY, FORMAT_STAGING_SIZE, HEADROOM};
pub use outcome::{NoOpReason, Outcome};

/// Replaces a buffer's content with formatted output. See
/// [`StrBuf::format_into`].
#[macro_export]
macro_rules! bds_format {
    ($buf:expr, $($arg:tt)*) => {
        $buf.format_into(::core::format_args!($($arg)*))
    };
}

/// Appends formatted output to a buffer. See [`StrBuf::append_formatted`].
#[macro_export]
macro_rules! bds_append {
    ($buf:expr, $($arg:tt)*) => {
        $buf.append_formatted(::core::format_args!($($arg)*))
    };
}
