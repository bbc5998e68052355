//! Loading of the two column input.


use core::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use lib::{IStr, IStrError, LineCol};
use serde::Serialize;

use crate::error::LoadError;

/// A single row of input, `(left, right)`.
pub type IntegerPair = (i64, i64);

/// The left and right columns of an input file in line order.
///
/// Values are only ever added in pairs, so both sides always have the same
/// length.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Lists {
    /// Construct an empty pair of lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row to the end of both lists.
    pub fn push(&mut self, (left, right): IntegerPair) {
        self.left.push(left);
        self.right.push(right);
    }

    #[inline]
    pub fn left(&self) -> &[i64] {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Write the lists back out in the two column format accepted by
    /// [load].
    pub fn write_to<W>(&self, mut out: W) -> io::Result<()>
    where
        W: Write,
    {
        for (left, right) in self.left.iter().zip(&self.right) {
            writeln!(out, "{left}\t{right}")?;
        }

        Ok(())
    }
}

impl Extend<IntegerPair> for Lists {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = IntegerPair>,
    {
        let iter = iter.into_iter();
        let (len, _) = iter.size_hint();

        self.left.reserve(len);
        self.right.reserve(len);

        for pair in iter {
            self.push(pair);
        }
    }
}

impl FromIterator<IntegerPair> for Lists {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = IntegerPair>,
    {
        let mut lists = Self::new();
        lists.extend(iter);
        lists
    }
}

impl fmt::Display for Lists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Left values: {:?}", self.left)?;
        write!(f, "Right values: {:?}", self.right)
    }
}

/// Load lists from the file at `path`.
///
/// Nothing is returned unless every line parses.
pub fn load<P>(path: P) -> Result<Lists, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let data = fs::read(path).map_err(|source| LoadError::Access {
        path: path.into(),
        source,
    })?;

    let lists = parse(path, &data)?;
    log::debug!("{}: loaded {} pairs", path.display(), lists.len());
    Ok(lists)
}

/// Parse lists out of `data`, using `path` to report errors.
///
/// Every non-blank line must consist of exactly two whitespace separated
/// integers.
pub fn parse(path: &Path, data: &[u8]) -> Result<Lists, LoadError> {
    let mut input = IStr::new(data);
    let mut lists = Lists::new();

    for mut line in input.lines() {
        if line.is_blank() {
            continue;
        }

        let pair = parse_pair(&mut line).map_err(|error| LoadError::Malformed {
            path: path.into(),
            pos: LineCol::from_span(data, error.span()),
            kind: error.into_kind(),
        })?;

        lists.push(pair);
    }

    Ok(lists)
}

fn parse_pair(line: &mut IStr<'_>) -> Result<IntegerPair, IStrError> {
    let pair = line.next()?;
    line.finish()?;
    Ok(pair)
}
