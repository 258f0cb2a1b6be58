//! Selection state.
//!
//! Selection is keyed by row id so it survives re-sorting, re-filtering and
//! page changes over the same data.

use std::collections::HashSet;

/// Tri-state of the header checkbox for a set of visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderCheckbox {
    #[default]
    Unchecked,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
    Checked,
}

/// ID-based selection state.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Currently selected IDs
    selected: HashSet<String>,
    /// Anchor for range selection (Shift+click starting point)
    anchor: Option<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get the anchor ID for range selection.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        let removed: Vec<_> = self.selected.drain().collect();
        self.anchor = None;
        removed
    }

    /// Toggle selection of an ID.
    /// Returns true if the ID is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.anchor = Some(id.to_string());
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Range select from anchor to target ID (Shift+click behavior).
    ///
    /// `ids_ordered` is the visible order. Without an anchor, or when either
    /// end isn't visible, only the target is toggled on. Existing selection
    /// outside the range is kept.
    ///
    /// Returns the IDs that were newly selected.
    pub fn range_select(&mut self, target_id: &str, ids_ordered: &[String]) -> Vec<String> {
        let anchor_id = self
            .anchor
            .clone()
            .unwrap_or_else(|| target_id.to_string());

        let anchor_pos = ids_ordered.iter().position(|id| id == &anchor_id);
        let target_pos = ids_ordered.iter().position(|id| id == target_id);

        let (start, end) = match (anchor_pos, target_pos) {
            (Some(a), Some(t)) => (a.min(t), a.max(t)),
            _ => {
                self.anchor = Some(target_id.to_string());
                return if self.selected.insert(target_id.to_string()) {
                    vec![target_id.to_string()]
                } else {
                    vec![]
                };
            }
        };

        let added = self.select_all(&ids_ordered[start..=end]);
        self.anchor = Some(target_id.to_string());
        added
    }

    /// Select all items from the provided list of IDs.
    /// Returns the IDs that were newly selected.
    pub fn select_all(&mut self, ids: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for id in ids {
            if self.selected.insert(id.clone()) {
                added.push(id.clone());
            }
        }
        added
    }

    /// Deselect the provided IDs.
    /// Returns the IDs that were deselected.
    pub fn deselect_all(&mut self, ids: &[String]) -> Vec<String> {
        let removed: Vec<_> = ids
            .iter()
            .filter(|id| self.selected.remove(id.as_str()))
            .cloned()
            .collect();
        if self
            .anchor
            .as_ref()
            .is_some_and(|anchor| removed.contains(anchor))
        {
            self.anchor = None;
        }
        removed
    }

    /// Select every visible ID, or deselect them all when every one is
    /// already selected. IDs outside `visible` are untouched.
    pub fn toggle_all(&mut self, visible: &[String]) {
        if self.checkbox_state(visible) == HeaderCheckbox::Checked {
            self.deselect_all(visible);
        } else {
            self.select_all(visible);
        }
    }

    /// Header checkbox state for the visible IDs.
    pub fn checkbox_state(&self, visible: &[String]) -> HeaderCheckbox {
        let count = visible.iter().filter(|id| self.is_selected(id)).count();
        match count {
            0 => HeaderCheckbox::Unchecked,
            n if n == visible.len() => HeaderCheckbox::Checked,
            _ => HeaderCheckbox::Indeterminate,
        }
    }

    /// Drop IDs not in `present`.
    /// Returns the IDs that were dropped.
    pub fn retain_present(&mut self, present: &HashSet<&str>) -> Vec<String> {
        let dropped: Vec<_> = self
            .selected
            .iter()
            .filter(|id| !present.contains(id.as_str()))
            .cloned()
            .collect();
        for id in &dropped {
            self.selected.remove(id);
        }
        if self
            .anchor
            .as_deref()
            .is_some_and(|anchor| !present.contains(anchor))
        {
            self.anchor = None;
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle("a"));
        assert!(selection.is_selected("a"));
        assert!(!selection.toggle("a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_checkbox_state_of_empty_view_is_unchecked() {
        let selection = Selection::new();
        assert_eq!(selection.checkbox_state(&[]), HeaderCheckbox::Unchecked);
    }

    #[test]
    fn test_range_select_from_anchor() {
        let order = ids(&["a", "b", "c", "d"]);
        let mut selection = Selection::new();
        selection.toggle("b");
        let added = selection.range_select("d", &order);
        assert_eq!(added.len(), 2);
        assert_eq!(selection.selected(), ids(&["b", "c", "d"]));
        assert_eq!(selection.anchor(), Some("d"));
    }

    #[test]
    fn test_retain_present_drops_missing() {
        let mut selection = Selection::new();
        selection.select_all(&ids(&["a", "b"]));
        let present: HashSet<&str> = ["a"].into_iter().collect();
        assert_eq!(selection.retain_present(&present), ids(&["b"]));
        assert_eq!(selection.selected(), ids(&["a"]));
    }
}
