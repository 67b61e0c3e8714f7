use alloc::vec::Vec;
use core::fmt;

/// Collects formatted output, keeping at most `limit - 1` bytes.
///
/// Writes never fail on overflow: the remaining output is counted but
/// dropped, so the caller can tell how much was lost.
pub(crate) struct Staging {
    bytes: Vec<u8>,
    keep: Option<usize>,
    produced: usize,
}

impl Staging {
    /// `None` keeps everything.
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            bytes: Vec::new(),
            keep: limit.map(|limit| limit.saturating_sub(1)),
            produced: 0,
        }
    }

    /// Renders `args`, returning `None` if a formatting trait failed.
    pub(crate) fn render(limit: Option<usize>, args: fmt::Arguments<'_>) -> Option<Self> {
        let mut staging = Self::new(limit);
        fmt::write(&mut staging, args).ok()?;
        Some(staging)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn produced(&self) -> usize {
        self.produced
    }

    pub(crate) fn is_truncated(&self) -> bool {
        self.produced > self.bytes.len()
    }
}

impl fmt::Write for Staging {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.produced += s.len();
        let room = match self.keep {
            Some(keep) => keep - self.bytes.len(),
            None => s.len(),
        };
        let take = room.min(s.len());
        self.bytes.extend_from_slice(&s.as_bytes()[..take]);
        Ok(())
    }
}
