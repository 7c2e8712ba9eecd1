#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Address of a single row inside a sectioned list host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub fn new(section: usize, item: usize) -> Self {
        IndexPath { section, item }
    }
}

/// Animation hint forwarded to the host. Hosts are free to ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowAnimation {
    #[default]
    Automatic,
    Fade,
    Top,
    Bottom,
    Left,
    Right,
    Middle,
    None,
}

/// Settings for a [`DiffCalculator`](super::DiffCalculator).
///
/// A calculator drives exactly one section. Hosts with several sections use
/// one calculator per section, each with its own `section_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    pub section_index: usize,
    pub insertion_animation: RowAnimation,
    pub deletion_animation: RowAnimation,
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section_index: usize) -> Self {
        self.section_index = section_index;
        self
    }

    pub fn with_insertion_animation(mut self, animation: RowAnimation) -> Self {
        self.insertion_animation = animation;
        self
    }

    pub fn with_deletion_animation(mut self, animation: RowAnimation) -> Self {
        self.deletion_animation = animation;
        self
    }
}

/// A list-rendering host driven by a [`DiffCalculator`](super::DiffCalculator).
///
/// Within one batch the calculator calls `begin_updates`, then `delete_rows`
/// with old-sequence paths in descending order, then `insert_rows` with
/// new-sequence paths in ascending order, then `end_updates`.
///
/// The calculator already holds the new rows when the batch starts, but it
/// stays mutably borrowed until `apply` returns. Hosts that need the row
/// values read them through `DiffCalculator::rows` after that.
pub trait ListHost {
    fn begin_updates(&mut self) {}

    fn delete_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    fn insert_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    fn end_updates(&mut self) {}
}
