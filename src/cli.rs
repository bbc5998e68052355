//! Command line driver.

#[cfg(test)]
mod tests;

use core::fmt;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use lib::cli::{Output, OutputKind};
use log::LevelFilter;
use serde::Serialize;

use crate::lists::{self, Lists};
use crate::similarity::{similarity_score_with, Scoring};
use crate::total_distance;

/// Input read when no `--input` is given.
pub const DEFAULT_INPUT: &str = "day_1/input.txt";

/// Command line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// File to read lists from.
    pub input: PathBuf,
    /// Also report the total distance.
    pub distance: bool,
    /// How to score similarity.
    pub scoring: Scoring,
    /// Output JSON.
    pub json: bool,
    /// Run in verbose mode.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            distance: false,
            scoring: Scoring::default(),
            json: false,
            verbose: false,
        }
    }
}

impl Opts {
    /// Parse options from the arguments of the current process.
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args_os().skip(1))
    }

    /// Parse options from the given arguments, not including the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut input = None;
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--input" => {
                    if input.is_some() {
                        bail!("duplicate `--input` arguments");
                    }

                    let path = it.next().context("missing argument to `--input`")?;
                    input = Some(PathBuf::from(path));
                }
                "--distance" => {
                    opts.distance = true;
                }
                "--per-occurrence" => {
                    opts.scoring = Scoring::PerOccurrence;
                }
                "--json" => {
                    opts.json = true;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if let Some(input) = input {
            opts.input = input;
        }

        Ok(opts)
    }

    /// How results should be written.
    pub fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }

    /// Level to install the logger at.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// The computed results for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub similarity: i128,
    pub distance: Option<u128>,
    pub scoring: Scoring,
}

impl Summary {
    /// Compute the summary for `lists`.
    pub fn compute(lists: &Lists, opts: &Opts) -> Self {
        let distance = opts
            .distance
            .then(|| total_distance(lists.left(), lists.right()));

        Self {
            similarity: similarity_score_with(lists.left(), lists.right(), opts.scoring),
            distance,
            scoring: opts.scoring,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(distance) = self.distance {
            writeln!(f, "Total distance between lists: {distance}")?;
        }

        write!(f, "Similarity score: {}", self.similarity)
    }
}

/// Load the configured input, then report the lists and their summary to
/// `o`.
pub fn run<O>(opts: &Opts, o: &mut Output<O>) -> Result<Summary>
where
    O: Write,
{
    log::debug!("reading lists from {}", opts.input.display());

    let lists = lists::load(&opts.input)?;
    o.record("lists", &lists)?;

    let summary = Summary::compute(&lists, opts);
    o.record("summary", &summary)?;
    Ok(summary)
}
