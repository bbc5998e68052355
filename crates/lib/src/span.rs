use core::fmt;
use core::ops::Range;

use crate::input::NL;

/// A byte offset into the input being processed.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    /// Get the raw offset.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// A line and column combination.
///
/// Both are stored zero-based, but displayed one-based the way editors and
/// compilers report positions.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
}

impl LineCol {
    pub const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, start: usize) -> Self {
        Self { line, start }
    }

    /// One-based line number.
    #[inline]
    pub fn line(&self) -> usize {
        self.line + 1
    }

    /// One-based column the span starts at.
    #[inline]
    pub fn column(&self) -> usize {
        self.start + 1
    }

    /// Resolve the position of `span` inside of `data`.
    pub fn from_span(data: &[u8], span: Range<Size>) -> Self {
        let span = Size::usize_range(span);
        let start = span.start.min(data.len());

        let Some(before) = data.get(..start) else {
            return Self::EMPTY;
        };

        let (line, column) = match memchr::memrchr(NL, before) {
            Some(n) => (
                memchr::memchr_iter(NL, before).count(),
                start.saturating_sub(n + 1),
            ),
            None => (0, start),
        };

        Self::new(line, column)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}
