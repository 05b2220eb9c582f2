use std::num::ParseFloatError;

use thiserror::Error;

/// Reasons a textual shape description could not be turned into a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("empty shape description")]
    MissingKind,
    #[error("unknown shape {0:?}, expected rectangle, circle or triangle")]
    UnknownKind(String),
    #[error("{kind} takes {expected} dimension(s), found {found}")]
    WrongArity {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid dimension {value:?}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
