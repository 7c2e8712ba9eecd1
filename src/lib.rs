//! Diffing of ordered sequences into index-addressed insertions and
//! deletions, plus a calculator that replays those edits on a list host.

pub mod calculator;
pub mod lcs;
pub mod notation;
pub mod patch;

pub use calculator::{CalculatorConfig, DiffCalculator, IndexPath, ListHost, RowAnimation};
pub use lcs::{diff, diff_by, lcs, lcs_len, Diff, DiffStep};
pub use patch::{apply, PatchError};
