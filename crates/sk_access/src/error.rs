use thiserror::Error;

/// Failure to create or use an accessor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("value written through an erased accessor is not a `{expected}`")]
    TypeMismatch { expected: &'static str },
}
