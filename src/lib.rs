//! Reconcile two lists of location ids by how far apart and how similar
//! they are.

pub mod cli;
pub mod distance;
mod error;
pub mod lists;
pub mod similarity;

pub use self::distance::total_distance;
pub use self::error::LoadError;
pub use self::lists::{load, IntegerPair, Lists};
pub use self::similarity::{similarity_score, similarity_score_with, Scoring};
