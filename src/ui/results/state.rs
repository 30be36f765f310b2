//! Expansion state for the results accordion.

use std::collections::HashMap;

use crate::ui::mvi::UiState;

/// Which result panels are expanded, keyed by item index.
///
/// Indices absent from the map are collapsed. The item index is the stable
/// identity: result sets are never reordered after receipt, and the map is
/// rebuilt from scratch for every new result set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: HashMap<usize, bool>,
}

impl UiState for AccordionState {}

impl AccordionState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(&index).copied().unwrap_or(false)
    }

    pub(super) fn clear(&mut self) {
        self.open.clear();
    }

    pub(super) fn set(&mut self, index: usize, open: bool) {
        self.open.insert(index, open);
    }

    pub(super) fn flip(&mut self, index: usize) {
        let entry = self.open.entry(index).or_insert(false);
        *entry = !*entry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_indices_are_collapsed() {
        let state = AccordionState::default();
        assert!(!state.is_open(0));
        assert!(!state.is_open(7));
    }

    #[test]
    fn flip_defaults_missing_key_to_false() {
        let mut state = AccordionState::default();
        state.flip(2);
        assert!(state.is_open(2));
        state.flip(2);
        assert!(!state.is_open(2));
    }
}
