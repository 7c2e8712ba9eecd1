pub mod types;
pub use types::*;

use log::trace;
use std::cmp::max;

/// Row-major `(m + 1) x (n + 1)` table where cell `(i, j)` holds the LCS
/// length of `old[..i]` and `new[..j]`.
struct Table {
    data: Vec<usize>,
    cols: usize,
}

impl Table {
    fn build<T, F>(old: &[T], new: &[T], eq: &mut F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let cols = new.len() + 1;
        let mut table = Table {
            data: vec![0; Table::cells(old.len(), new.len())],
            cols,
        };
        for i in 1..=old.len() {
            for j in 1..=new.len() {
                let len = if eq(&old[i - 1], &new[j - 1]) {
                    table.get(i - 1, j - 1) + 1
                } else {
                    max(table.get(i - 1, j), table.get(i, j - 1))
                };
                table.set(i, j, len);
            }
        }
        table
    }

    /// Cell count of the table for inputs of length `m` and `n`.
    fn cells(m: usize, n: usize) -> usize {
        m.checked_add(1)
            .zip(n.checked_add(1))
            .and_then(|(rows, cols)| rows.checked_mul(cols))
            .unwrap_or_else(|| panic!("lcs table for {} x {} elements overflows usize", m, n))
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, val: usize) {
        self.data[i * self.cols + j] = val;
    }
}

/// One move of the backward walk, carrying the index it consumed.
enum Move {
    Keep(usize),
    Delete(usize),
    Insert(usize),
}

/// Walks the table from `(m, n)` back to `(0, 0)`.
/// Moves come out last-to-first. Ties go to the deletion.
fn traceback<T, F>(old: &[T], new: &[T], table: &Table, eq: &mut F) -> Vec<Move>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut moves = Vec::with_capacity(old.len() + new.len());
    let mut i = old.len();
    let mut j = new.len();
    while i > 0 || j > 0 {
        if i > 0
            && j > 0
            && eq(&old[i - 1], &new[j - 1])
            && table.get(i, j) == table.get(i - 1, j - 1) + 1
        {
            i -= 1;
            j -= 1;
            moves.push(Move::Keep(i));
        } else if j == 0 || (i > 0 && table.get(i - 1, j) >= table.get(i, j - 1)) {
            i -= 1;
            moves.push(Move::Delete(i));
        } else {
            j -= 1;
            moves.push(Move::Insert(j));
        }
    }
    moves
}

fn same_by<T, F>(old: &[T], new: &[T], eq: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    old.len() == new.len() && old.iter().zip(new).all(|(a, b)| eq(a, b))
}

/// Computes the diff between two sequences using the longest common subsequence.
///
/// Time and space are both `O(old.len() * new.len())`.
///
/// # Examples
///
/// ```
/// use listdiff::lcs::{diff, DiffStep};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let result = diff(&old, &new);
/// assert_eq!(result.steps(), &[
///     DiffStep::Delete { index: 1, value: 2 },
///     DiffStep::Insert { index: 2, value: 4 },
/// ]);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> Diff<T> {
    diff_by(old, new, |a, b| a == b)
}

/// Same as [`diff`], with the equality relation supplied by the caller.
///
/// The relation should be an equivalence; the output is deterministic for a
/// given relation and input order.
pub fn diff_by<T, F>(old: &[T], new: &[T], mut eq: F) -> Diff<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if same_by(old, new, &mut eq) {
        return Diff::default();
    }
    if old.is_empty() {
        let insertions = new
            .iter()
            .enumerate()
            .map(|(index, e)| DiffStep::Insert { index, value: e.clone() })
            .collect();
        return Diff::from_parts(vec![], insertions);
    }
    if new.is_empty() {
        let deletions = old
            .iter()
            .enumerate()
            .rev()
            .map(|(index, e)| DiffStep::Delete { index, value: e.clone() })
            .collect();
        return Diff::from_parts(deletions, vec![]);
    }

    trace!("lcs table {}x{}", old.len() + 1, new.len() + 1);
    let table = Table::build(old, new, &mut eq);
    let mut deletions = vec![];
    let mut insertions = vec![];
    for m in traceback(old, new, &table, &mut eq) {
        match m {
            Move::Keep(_) => {}
            Move::Delete(index) => deletions.push(DiffStep::Delete {
                index,
                value: old[index].clone(),
            }),
            Move::Insert(index) => insertions.push(DiffStep::Insert {
                index,
                value: new[index].clone(),
            }),
        }
    }
    insertions.reverse();
    Diff::from_parts(deletions, insertions)
}

/// Returns the common subsequence retained by [`diff`], in order.
pub fn lcs<T: Eq + Clone>(old: &[T], new: &[T]) -> Vec<T> {
    if old.is_empty() || new.is_empty() {
        return vec![];
    }
    let mut eq = |a: &T, b: &T| a == b;
    let table = Table::build(old, new, &mut eq);
    let mut common: Vec<T> = traceback(old, new, &table, &mut eq)
        .into_iter()
        .filter_map(|m| match m {
            Move::Keep(i) => Some(old[i].clone()),
            _ => None,
        })
        .collect();
    common.reverse();
    common
}

/// Length of the longest common subsequence.
pub fn lcs_len<T: Eq>(old: &[T], new: &[T]) -> usize {
    if old.is_empty() || new.is_empty() {
        return 0;
    }
    Table::build(old, new, &mut |a: &T, b: &T| a == b).get(old.len(), new.len())
}
