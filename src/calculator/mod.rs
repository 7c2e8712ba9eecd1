mod types;
pub use types::*;

use crate::lcs::{self, Diff};
use log::debug;

/// Keeps the rows currently shown in one section of a [`ListHost`] and turns
/// every replacement of those rows into a batch of row deletions and
/// insertions.
///
/// The host is borrowed per call and never stored.
///
/// # Examples
///
/// ```
/// use listdiff::calculator::{DiffCalculator, IndexPath, ListHost, RowAnimation};
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// impl ListHost for Log {
///     fn delete_rows(&mut self, paths: &[IndexPath], _: RowAnimation) {
///         self.0.extend(paths.iter().map(|p| format!("-{}", p.item)));
///     }
///     fn insert_rows(&mut self, paths: &[IndexPath], _: RowAnimation) {
///         self.0.extend(paths.iter().map(|p| format!("+{}", p.item)));
///     }
/// }
///
/// let mut host = Log::default();
/// let mut calculator = DiffCalculator::new(vec!["a", "b", "c"]);
/// calculator.apply(vec!["a", "c", "d"], &mut host);
/// assert_eq!(host.0, ["-1", "+2"]);
/// assert_eq!(calculator.rows(), &["a", "c", "d"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiffCalculator<T> {
    rows: Vec<T>,
    config: CalculatorConfig,
}

impl<T: Eq + Clone> DiffCalculator<T> {
    pub fn new(initial_rows: Vec<T>) -> Self {
        Self::with_config(initial_rows, CalculatorConfig::default())
    }

    pub fn with_config(initial_rows: Vec<T>, config: CalculatorConfig) -> Self {
        DiffCalculator {
            rows: initial_rows,
            config,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn set_section_index(&mut self, section_index: usize) {
        self.config.section_index = section_index;
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Replaces the current rows with `new_rows` and drives `host` through
    /// the resulting batch update. Returns the diff that was applied.
    ///
    /// When the rows compare equal the host is not touched. Empty deletion
    /// or insertion groups are not forwarded.
    pub fn apply<H: ListHost + ?Sized>(&mut self, new_rows: Vec<T>, host: &mut H) -> Diff<T> {
        let diff = lcs::diff(&self.rows, &new_rows);
        self.rows = new_rows;
        if diff.is_empty() {
            return diff;
        }

        let section = self.config.section_index;
        let deletions: Vec<IndexPath> = diff
            .deletions()
            .map(|s| IndexPath::new(section, s.index()))
            .collect();
        let insertions: Vec<IndexPath> = diff
            .insertions()
            .map(|s| IndexPath::new(section, s.index()))
            .collect();
        debug!(
            "section {}: {} deletions, {} insertions",
            section,
            deletions.len(),
            insertions.len()
        );

        host.begin_updates();
        if !deletions.is_empty() {
            host.delete_rows(&deletions, self.config.deletion_animation);
        }
        if !insertions.is_empty() {
            host.insert_rows(&insertions, self.config.insertion_animation);
        }
        host.end_updates();
        diff
    }
}
