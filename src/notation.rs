//! Compact text form of diffs: `-value@index` for a deletion, `+value@index`
//! for an insertion, e.g. `[-b@1, +x@1]`.

use crate::lcs::{Diff, DiffStep};
use std::fmt;

impl<T: fmt::Display> fmt::Display for DiffStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffStep::Insert { index, value } => write!(f, "+{}@{}", value, index),
            DiffStep::Delete { index, value } => write!(f, "-{}@{}", value, index),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Diff<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, step) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", step)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use crate::lcs::{diff, DiffStep};

    #[test]
    fn test_step_notation() {
        assert_eq!(DiffStep::Insert { index: 3, value: "x" }.to_string(), "+x@3");
        assert_eq!(DiffStep::Delete { index: 0, value: 7 }.to_string(), "-7@0");
    }

    #[test]
    fn test_diff_notation() {
        let result = diff(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(result.to_string(), "[-b@1, +x@1]");
    }

    #[test]
    fn test_empty_diff_notation() {
        assert_eq!(diff(&[1, 2], &[1, 2]).to_string(), "[]");
    }
}
