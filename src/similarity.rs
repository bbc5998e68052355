//! Similarity between two lists.


use core::fmt;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// How repeated values in the left list are scored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scoring {
    /// Every distinct left value contributes once.
    #[default]
    Distinct,
    /// Every left occurrence contributes, so a value repeated `n` times on the
    /// left contributes `n` times.
    PerOccurrence,
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scoring::Distinct => write!(f, "distinct"),
            Scoring::PerOccurrence => write!(f, "per-occurrence"),
        }
    }
}

/// Score `left` against `right` with [Scoring::Distinct].
///
/// Each distinct value `v` in `left` adds `v * count(v in right)`.
pub fn similarity_score(left: &[i64], right: &[i64]) -> i128 {
    similarity_score_with(left, right, Scoring::Distinct)
}

/// Score `left` against `right` using the given scoring.
///
/// Products and sums are computed in `i128`, which holds any `i64` times any
/// count for inputs that fit in memory.
pub fn similarity_score_with(left: &[i64], right: &[i64], scoring: Scoring) -> i128 {
    let counts = counts(right);
    let score = |v: &i64| i128::from(*v) * counts.get(v).copied().unwrap_or_default();

    match scoring {
        Scoring::Distinct => {
            let mut seen = HashSet::with_capacity(left.len());
            left.iter().filter(|v| seen.insert(**v)).map(score).sum()
        }
        Scoring::PerOccurrence => left.iter().map(score).sum(),
    }
}

/// Number of occurrences of each value.
fn counts(values: &[i64]) -> HashMap<i64, i128> {
    let mut counts = HashMap::with_capacity(values.len());

    for &v in values {
        *counts.entry(v).or_default() += 1;
    }

    counts
}
