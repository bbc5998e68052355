pub mod cli;
pub mod input;
mod span;

pub use self::input::{ErrorKind, FromInput, IStr, IStrError};
pub use self::span::{LineCol, Size};
