use std::io;
use std::path::Path;

use lib::{ErrorKind, LineCol};
use thiserror::Error;

/// Errors raised while loading a pair of lists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: failed to read input", .path.display())]
    Access {
        path: Box<Path>,
        #[source]
        source: io::Error,
    },
    #[error("{}:{pos}: malformed input: {kind}", .path.display())]
    Malformed {
        path: Box<Path>,
        pos: LineCol,
        kind: ErrorKind,
    },
}
