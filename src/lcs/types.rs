#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single edit produced by the LCS diff.
///
/// `Delete` indexes into the old sequence, `Insert` indexes into the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffStep<T> {
    Insert { index: usize, value: T },
    Delete { index: usize, value: T },
}

impl<T> DiffStep<T> {
    pub fn index(&self) -> usize {
        match self {
            DiffStep::Insert { index, .. } | DiffStep::Delete { index, .. } => *index,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            DiffStep::Insert { value, .. } | DiffStep::Delete { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            DiffStep::Insert { value, .. } | DiffStep::Delete { value, .. } => value,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, DiffStep::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, DiffStep::Delete { .. })
    }
}

/// Result of the LCS diff function.
///
/// Steps are stored in application order: every deletion first, by strictly
/// descending old index, then every insertion, by strictly ascending new index.
/// Removing the deletions one by one from the old sequence and then inserting
/// the insertions one by one yields the new sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diff<T> {
    steps: Vec<DiffStep<T>>,
}

impl<T> Default for Diff<T> {
    fn default() -> Self {
        Diff { steps: Vec::new() }
    }
}

impl<T> Diff<T> {
    /// `deletions` must already be descending, `insertions` ascending.
    pub(crate) fn from_parts(mut deletions: Vec<DiffStep<T>>, insertions: Vec<DiffStep<T>>) -> Self {
        deletions.extend(insertions);
        Diff { steps: deletions }
    }

    /// Number of steps. Zero means the sequences compared equal.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[DiffStep<T>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffStep<T>> {
        self.steps.iter()
    }

    /// Insertion steps in ascending new-index order.
    pub fn insertions(&self) -> impl Iterator<Item = &DiffStep<T>> {
        self.steps.iter().filter(|s| s.is_insert())
    }

    /// Deletion steps in descending old-index order.
    pub fn deletions(&self) -> impl Iterator<Item = &DiffStep<T>> {
        self.steps.iter().filter(|s| s.is_delete())
    }

    pub fn into_steps(self) -> Vec<DiffStep<T>> {
        self.steps
    }
}

impl<T> IntoIterator for Diff<T> {
    type Item = DiffStep<T>;
    type IntoIter = std::vec::IntoIter<DiffStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Diff<T> {
    type Item = &'a DiffStep<T>;
    type IntoIter = std::slice::Iter<'a, DiffStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
