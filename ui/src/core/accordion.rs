//! Expand state for the FAQ accordion.

use std::collections::BTreeSet;

/// Which entries of an accordion are open.
///
/// Entries toggle independently: opening one never closes another. Nothing is open initially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: BTreeSet<usize>,
}

impl AccordionState {
    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
