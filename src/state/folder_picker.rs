//! Folder Picker State Management
//!
//! Holds the query, the fuzzy-filtered view of the candidate folders and the
//! cursor for the terminal folder picker.
//!
//! Key features:
//! - Fuzzy filtering on labels, best match first
//! - Keyboard navigation with scroll support

use std::path::PathBuf;

use crate::models::FolderPickItem;

use super::fuzzy::fuzzy_score;

/// Maximum visible rows in picker viewport
pub const MAX_VISIBLE_ROWS: usize = 10;

/// An item that survived the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredItem {
    /// Position in `FolderPickerState::items`
    pub index: usize,
    pub score: i32,
    /// Label character indices to highlight
    pub matched: Vec<usize>,
}

/// Folder picker state
#[derive(Debug, Clone)]
pub struct FolderPickerState {
    /// Current search/filter query
    pub query: String,

    /// All candidate folders, in enumeration order
    pub items: Vec<FolderPickItem>,

    /// Items matching the query, best first
    pub filtered: Vec<FilteredItem>,

    /// Cursor position in `filtered`
    pub selected_index: usize,

    /// Scroll offset for viewport
    pub scroll_offset: usize,
}

impl FolderPickerState {
    pub fn new(items: Vec<FolderPickItem>) -> Self {
        let mut state = Self {
            query: String::new(),
            items,
            filtered: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
        };
        state.filter_items();
        state
    }

    /// Replace the query and refilter
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.filter_items();
        // A new query starts from the best match
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_char(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Filter items by current query
    fn filter_items(&mut self) {
        let mut filtered: Vec<FilteredItem> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                fuzzy_score(&self.query, &item.label).map(|m| FilteredItem {
                    index,
                    score: m.score,
                    matched: m.indices,
                })
            })
            .collect();
        // Stable: equal scores keep enumeration order
        filtered.sort_by(|a, b| b.score.cmp(&a.score));
        self.filtered = filtered;
    }

    /// Get the currently selected item
    pub fn selected_item(&self) -> Option<&FolderPickItem> {
        self.filtered
            .get(self.selected_index)
            .and_then(|f| self.items.get(f.index))
    }

    /// Path of the currently selected item
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_item().map(|item| item.full_path.clone())
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_visible();
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.filtered.len() {
            self.selected_index += 1;
            self.ensure_visible();
        }
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(MAX_VISIBLE_ROWS);
        self.ensure_visible();
    }

    pub fn page_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + MAX_VISIBLE_ROWS).min(self.filtered.len() - 1);
        self.ensure_visible();
    }

    /// Ensure selected item is visible in viewport
    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = self.selected_index.saturating_sub(MAX_VISIBLE_ROWS - 1);
        }
    }

    /// Rows in the current viewport: the item, its match data and whether
    /// the cursor is on it.
    pub fn visible_rows(&self) -> impl Iterator<Item = (&FolderPickItem, &FilteredItem, bool)> {
        self.filtered
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(MAX_VISIBLE_ROWS)
            .filter_map(move |(pos, f)| {
                self.items
                    .get(f.index)
                    .map(|item| (item, f, pos == self.selected_index))
            })
    }

    /// Number of items matching the query
    pub fn total_matches(&self) -> usize {
        self.filtered.len()
    }

    /// Check if there are more items above the viewport
    pub fn has_more_above(&self) -> bool {
        self.scroll_offset > 0
    }

    /// Items hidden below the viewport
    pub fn more_below(&self) -> usize {
        self.filtered
            .len()
            .saturating_sub(self.scroll_offset + MAX_VISIBLE_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<FolderPickItem> {
        vec![
            FolderPickItem::new("./", "/proj"),
            FolderPickItem::new("./docs", "/proj/docs"),
            FolderPickItem::new("./src", "/proj/src"),
            FolderPickItem::new("./src/lib", "/proj/src/lib"),
        ]
    }

    fn many_items(n: usize) -> Vec<FolderPickItem> {
        (0..n)
            .map(|i| FolderPickItem::new(format!("./dir{:02}", i), format!("/proj/dir{:02}", i)))
            .collect()
    }

    #[test]
    fn test_new_state_shows_everything_in_order() {
        let state = FolderPickerState::new(create_test_items());
        assert_eq!(state.total_matches(), 4);
        assert_eq!(state.selected_path(), Some(PathBuf::from("/proj")));
        let labels: Vec<_> = state.visible_rows().map(|(i, _, _)| i.label.as_str()).collect();
        assert_eq!(labels, vec!["./", "./docs", "./src", "./src/lib"]);
    }

    #[test]
    fn test_filter_ranks_best_match_first() {
        let mut state = FolderPickerState::new(create_test_items());
        state.set_query("lib".to_string());

        assert_eq!(state.total_matches(), 1);
        assert_eq!(state.selected_path(), Some(PathBuf::from("/proj/src/lib")));
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut state = FolderPickerState::new(create_test_items());
        state.push_char('s');
        state.push_char('r');
        assert_eq!(state.query, "sr");
        assert_eq!(state.total_matches(), 2);

        state.pop_char();
        state.pop_char();
        assert!(state.query.is_empty());
        assert_eq!(state.total_matches(), 4);
    }

    #[test]
    fn test_query_change_resets_cursor() {
        let mut state = FolderPickerState::new(create_test_items());
        state.move_down();
        state.move_down();
        state.push_char('d');
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_no_matches_has_no_selection() {
        let mut state = FolderPickerState::new(create_test_items());
        state.set_query("zzz".to_string());
        assert_eq!(state.total_matches(), 0);
        assert!(state.selected_item().is_none());
        state.move_down();
        state.page_down();
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_navigation() {
        let mut state = FolderPickerState::new(create_test_items());

        state.move_down();
        assert_eq!(state.selected_index, 1);
        state.move_down();
        state.move_down();
        state.move_down(); // Should not go past end
        assert_eq!(state.selected_index, 3);

        state.move_up();
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_scroll_visibility() {
        let mut state = FolderPickerState::new(many_items(25));

        assert!(!state.has_more_above());
        assert_eq!(state.more_below(), 15);

        for _ in 0..24 {
            state.move_down();
        }

        assert!(state.has_more_above());
        assert_eq!(state.more_below(), 0);
        let selected: Vec<_> = state.visible_rows().filter(|(_, _, sel)| *sel).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].0.label, "./dir24");
    }

    #[test]
    fn test_paging() {
        let mut state = FolderPickerState::new(many_items(25));

        state.page_down();
        assert_eq!(state.selected_index, MAX_VISIBLE_ROWS);
        state.page_down();
        state.page_down();
        assert_eq!(state.selected_index, 24);

        state.page_up();
        assert_eq!(state.selected_index, 24 - MAX_VISIBLE_ROWS);
        state.page_up();
        state.page_up();
        assert_eq!(state.selected_index, 0);
        assert!(!state.has_more_above());
    }
}
