use thiserror::Error;

/// Reasons a [`Diff`](crate::lcs::Diff) cannot be applied to a sequence.
///
/// Indices are reported as they appear in the offending step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("deletion at index {index} is out of bounds for length {len}")]
    DeleteOutOfBounds { index: usize, len: usize },
    #[error("deletion at index {index} does not match the element found there")]
    DeleteMismatch { index: usize },
    #[error("insertion at index {index} is out of bounds for length {len}")]
    InsertOutOfBounds { index: usize, len: usize },
    #[error("deletion at index {index} breaks descending order")]
    DeletionsUnordered { index: usize },
    #[error("insertion at index {index} breaks ascending order")]
    InsertionsUnordered { index: usize },
}
