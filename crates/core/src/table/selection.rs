//! Selection tracker
//!
//! Holds row ids independently of filter, sort and page state. Ids of rows that
//! a filter currently hides stay selected.

use std::collections::BTreeSet;

use crate::models::RowId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: BTreeSet<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of one id
    pub fn toggle(&mut self, id: RowId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Toggle-all over the visible ids
    ///
    /// Clears the selection when every visible id is already selected,
    /// otherwise replaces it with exactly the visible ids.
    pub fn select_all_visible(&mut self, visible: &[RowId]) {
        if self.all_selected(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().copied().collect();
        }
    }

    /// True when at least one id is visible and all of them are selected
    pub fn all_selected(&self, visible: &[RowId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<RowId> for Selection {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        selection.toggle(3);
        assert!(selection.contains(3));
        selection.toggle(3);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_twice_clears() {
        let mut selection = Selection::new();
        selection.select_all_visible(&[1, 2, 3]);
        assert_eq!(selection.len(), 3);
        selection.select_all_visible(&[1, 2, 3]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_replaces_partial_and_stale() {
        let mut selection: Selection = [2, 99].into_iter().collect();
        selection.select_all_visible(&[1, 2]);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_select_all_with_nothing_visible() {
        let mut selection: Selection = [5].into_iter().collect();
        selection.select_all_visible(&[]);
        assert!(selection.is_empty());
        assert!(!selection.all_selected(&[]));
    }
}
