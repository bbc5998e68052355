use core::fmt;
use core::ops::Range;

use bstr::BString;

use crate::span::Size;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(BString),
    NotUtf8,
    ExpectedPair,
    TrailingToken(BString),
    UnexpectedEof,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedPair => write!(f, "expected a pair of values"),
            ErrorKind::TrailingToken(n) => write!(f, "unexpected trailing token `{n}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span in the original input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<Size> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = Size::usize_range(self.span());
        write!(f, "{} (at {span:?})", self.kind)
    }
}

impl std::error::Error for IStrError {}
