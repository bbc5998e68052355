//! Input parser.

mod error;
mod lines;

use core::ops::Range;
use std::str::from_utf8;

use bstr::{BStr, BString};

pub use self::error::{ErrorKind, IStrError};
pub use self::lines::Lines;

type Result<T> = core::result::Result<T, IStrError>;
use crate::span::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Offset of `data` in the original input.
    index: Size,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: Size::ZERO,
        }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Test if the remaining input only consists of whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.data)
    }

    /// Iterate over the remaining lines of input.
    #[inline]
    pub fn lines(&mut self) -> Lines<'_, 'a> {
        Lines::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput<'a>,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        T::try_from_input(self)
    }

    /// Split off the next line, not including the newline itself.
    #[inline]
    pub fn try_line(&mut self) -> Option<IStr<'a>> {
        self.split_once(NL)
    }

    /// Ensure that only whitespace remains, erroring on the first word that
    /// doesn't belong.
    pub fn finish(&mut self) -> Result<()> {
        let Some((span, word)) = self.try_next_word() else {
            return Ok(());
        };

        Err(IStrError::new(
            span,
            ErrorKind::TrailingToken(BString::from(word)),
        ))
    }

    /// Try to split off the next whitespace separated word.
    pub fn try_next_word(&mut self) -> Option<(Range<Size>, &'a [u8])> {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            self.advance(s);
            return None;
        }

        let word = self.data.get(s..n)?;
        let span = self.index.saturating_add(Size::new(s))..self.index.saturating_add(Size::new(n));
        self.advance(n);
        Some((span, word))
    }

    /// Split once at the given byte or until the end of string.
    fn split_once(&mut self, b: u8) -> Option<IStr<'a>> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = self.data;
            self.advance(data.len());
            return Some(IStr { data, index });
        };

        let data = self.data.get(..at)?;
        self.advance(at.saturating_add(1));
        Some(IStr { data, index })
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index.advance(n);
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, ignoring leading whitespace. Returns `None` if
    /// the input is exhausted.
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'a>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

impl<'a, A, B> FromInput<'a> for (A, B)
where
    A: FromInput<'a>,
    B: FromInput<'a>,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedPair
    }

    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let index = p.index;

        let Some(a) = p.try_next()? else {
            return Ok(None);
        };

        let Some(b) = p.try_next()? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(Some((a, b)))
    }
}

impl<'a> FromInput<'a> for i64 {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let Some((span, word)) = p.try_next_word() else {
            return Ok(None);
        };

        let Ok(string) = from_utf8(word) else {
            return Err(IStrError::new(span, ErrorKind::NotUtf8));
        };

        let Ok(n) = string.parse() else {
            return Err(IStrError::new(span, ErrorKind::NotInteger(BString::from(word))));
        };

        Ok(Some(n))
    }
}
