mod types;
pub use types::*;

use crate::lcs::{Diff, DiffStep};

/// Applies `diff` to `old`, returning the new sequence.
///
/// Deletions are removed one at a time in the order given (descending old
/// index), then insertions are inserted in the order given (ascending new
/// index). A deletion must carry the value found at its index. A deletion
/// that follows an insertion is reported as out of order.
///
/// # Examples
///
/// ```
/// use listdiff::{lcs::diff, patch::apply};
///
/// let old = vec!['a', 'b', 'c'];
/// let new = vec!['c', 'a', 'd'];
/// assert_eq!(apply(&old, &diff(&old, &new)), Ok(new));
/// ```
pub fn apply<T: PartialEq + Clone>(old: &[T], diff: &Diff<T>) -> Result<Vec<T>, PatchError> {
    if diff.is_empty() {
        return Ok(old.to_vec());
    }

    let mut result = old.to_vec();
    let mut last_delete: Option<usize> = None;
    let mut last_insert: Option<usize> = None;

    for step in diff {
        match step {
            DiffStep::Delete { index, value } => {
                let index = *index;
                if last_insert.is_some() || last_delete.is_some_and(|prev| index >= prev) {
                    return Err(PatchError::DeletionsUnordered { index });
                }
                if index >= result.len() {
                    return Err(PatchError::DeleteOutOfBounds {
                        index,
                        len: result.len(),
                    });
                }
                if result[index] != *value {
                    return Err(PatchError::DeleteMismatch { index });
                }
                result.remove(index);
                last_delete = Some(index);
            }
            DiffStep::Insert { index, value } => {
                let index = *index;
                if last_insert.is_some_and(|prev| index <= prev) {
                    return Err(PatchError::InsertionsUnordered { index });
                }
                if index > result.len() {
                    return Err(PatchError::InsertOutOfBounds {
                        index,
                        len: result.len(),
                    });
                }
                result.insert(index, value.clone());
                last_insert = Some(index);
            }
        }
    }

    Ok(result)
}
