//! Error types for field access.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("Index out of bounds: {axis} index {index} (len={len})")]
    IndexOutOfBounds {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

pub type FieldResult<T> = Result<T, FieldError>;
