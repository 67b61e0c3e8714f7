use std::fmt;

use bdstring::{
    bds_append, bds_format, BufferOptions, FormatLimit, NoOpReason, Outcome, StrBuf,
    FORMAT_STAGING_SIZE,
};

fn unbounded() -> BufferOptions {
    BufferOptions {
        format_limit: FormatLimit::Unbounded,
        ..BufferOptions::default()
    }
}

struct Failing;

impl fmt::Display for Failing {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn test_format_replaces_content() {
    let mut buf = StrBuf::from("old content");
    assert_eq!(bds_format!(buf, "{} {}", "Hello", "World"), Outcome::Applied);
    assert_eq!(buf.as_bytes(), b"Hello World");
}

#[test]
fn test_append_formatted() {
    let mut buf = StrBuf::from("Hello World");
    assert_eq!(bds_append!(buf, ", {}", "Hello Earth"), Outcome::Applied);
    assert_eq!(buf.as_bytes(), b"Hello World, Hello Earth");
}

#[test]
fn test_format_numbers_and_padding() {
    let mut buf = StrBuf::new();
    buf.format_into(format_args!("{:>5}|{:<3}|{:04x}", 42, 'a', 255));
    assert_eq!(buf.as_bytes(), b"   42|a  |00ff");
}

#[test]
fn test_format_grows_buffer() {
    let mut buf = StrBuf::with_capacity(4);
    bds_format!(buf, "{}", "longer than four");
    assert_eq!(buf.as_bytes(), b"longer than four");
    assert_eq!(buf.capacity(), 24);
}

#[test]
fn test_format_truncates_at_staging_limit() {
    let mut buf = StrBuf::new();
    let long = "a".repeat(5000);
    assert_eq!(
        bds_format!(buf, "{long}"),
        Outcome::Truncated {
            produced: 5000,
            kept: FORMAT_STAGING_SIZE - 1
        }
    );
    assert_eq!(buf.len(), 4095);
    assert!(buf.as_bytes().iter().all(|&b| b == b'a'));
}

#[test]
fn test_format_exactly_at_limit() {
    let mut buf = StrBuf::new();
    let fits = "b".repeat(4095);
    assert_eq!(bds_format!(buf, "{fits}"), Outcome::Applied);
    assert_eq!(buf.len(), 4095);
}

#[test]
fn test_append_formatted_truncation_is_per_call() {
    let mut buf = StrBuf::new();
    let long = "c".repeat(4100);
    bds_append!(buf, "{long}");
    bds_append!(buf, "{long}");
    assert_eq!(buf.len(), 2 * 4095);
}

#[test]
fn test_unbounded_format() {
    let mut buf = StrBuf::with_options(8, unbounded());
    let long = "d".repeat(10_000);
    assert_eq!(bds_format!(buf, "<{long}>"), Outcome::Applied);
    assert_eq!(buf.len(), 10_002);
    assert_eq!(buf.as_bytes()[0], b'<');
    assert_eq!(buf.as_bytes()[10_001], b'>');
}

#[test]
fn test_custom_staging_size() {
    let options = BufferOptions {
        format_limit: FormatLimit::Staged(6),
        ..BufferOptions::default()
    };
    let mut buf = StrBuf::with_options(16, options);
    assert_eq!(
        bds_format!(buf, "{}", 1_234_567),
        Outcome::Truncated {
            produced: 7,
            kept: 5
        }
    );
    assert_eq!(buf.as_bytes(), b"12345");
}

#[test]
fn test_formatted_output_stops_at_nul() {
    let mut buf = StrBuf::new();
    bds_format!(buf, "ab{}cd", '\0');
    assert_eq!(buf.as_bytes(), b"ab");
}

#[test]
fn test_failing_display_leaves_buffer() {
    let mut buf = StrBuf::from("keep");
    assert_eq!(
        bds_format!(buf, "{}", Failing),
        Outcome::Ignored(NoOpReason::FormatError)
    );
    assert_eq!(
        bds_append!(buf, "{}", Failing),
        Outcome::Ignored(NoOpReason::FormatError)
    );
    assert_eq!(buf.as_bytes(), b"keep");
}

#[test]
fn test_format_from_own_content_through_copy() {
    let mut buf = StrBuf::from("Hello");
    let previous = buf.clone();
    bds_format!(buf, "{previous} {previous}");
    assert_eq!(buf.as_bytes(), b"Hello Hello");
}
