//! List adapter seam.
//!
//! # Responsibility
//! - Define the binding contract between an ordered record list and a
//!   scrollable row view.
//! - Provide the plain-text implementation used by the CLI frontend.
//!
//! # Invariants
//! - `rebind` replaces the whole bound sequence; adapters never see
//!   incremental inserts or removals.
//! - Bound order is exactly the order handed in; adapters do not sort.

use crate::model::cat::Cat;

/// Binding layer mapping an ordered record sequence to rendered rows.
pub trait ListAdapter {
    /// Replaces the bound record sequence.
    fn rebind(&mut self, cats: &[Cat]);

    /// Signals that bound data changed and rows need re-rendering.
    fn notify_changed(&mut self);
}

/// Text-row adapter backing the CLI list view.
pub struct TextListAdapter {
    rows: Vec<String>,
    dirty: bool,
}

impl TextListAdapter {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            dirty: false,
        }
    }

    /// Number of currently bound rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Renders bound rows as one line per record, clearing the dirty flag.
    pub fn render(&mut self) -> String {
        self.dirty = false;
        self.rows.join("\n")
    }

    /// Whether a `notify_changed` has not yet been rendered.
    pub fn needs_render(&self) -> bool {
        self.dirty
    }
}

impl Default for TextListAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ListAdapter for TextListAdapter {
    fn rebind(&mut self, cats: &[Cat]) {
        self.rows = cats
            .iter()
            .map(|cat| format!("{}  (age {})", cat.name, cat.age))
            .collect();
    }

    fn notify_changed(&mut self) {
        self.dirty = true;
    }
}
