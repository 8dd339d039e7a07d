//! Filtering, sorting and category extraction for listing pages.
//!
//! Everything here is pure so the page components only wire signals to it.

use std::cmp::Ordering;

use super::state::LoadState;
use crate::config::ALL_CATEGORY;
use crate::models::{FacultyMember, ParsedItem};

/// Something a listing page can filter by category and search text.
pub trait Listable {
    /// Category used by the filter tabs; empty means uncategorized.
    fn category(&self) -> &str;

    /// Whether any searchable field contains `needle` (already lowercased).
    fn matches_query(&self, needle: &str) -> bool;
}

impl Listable for ParsedItem {
    fn category(&self) -> &str {
        &self.category
    }

    fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl Listable for FacultyMember {
    fn category(&self) -> &str {
        &self.department
    }

    fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.position.to_lowercase().contains(needle)
    }
}

/// `"All"` followed by each distinct non-empty category, in order of first
/// appearance.
pub fn category_options<T: Listable>(items: &[T]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORY.to_string()];
    for item in items {
        let category = item.category().trim();
        if !category.is_empty() && !options.iter().any(|c| c == category) {
            options.push(category.to_string());
        }
    }
    options
}

/// Items in `category` (or any, for `"All"`) whose searchable fields contain
/// `query`, case-insensitively. Input order is preserved.
pub fn filter_items<T: Listable + Clone>(items: &[T], category: &str, query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| category == ALL_CATEGORY || item.category().trim() == category)
        .filter(|item| needle.is_empty() || item.matches_query(&needle))
        .cloned()
        .collect()
}

/// Ordering of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Dated items newest first, then undated items by id
    Newest,
    /// Pinned items first, each half ordered as [`SortOrder::Newest`]
    PinnedThenNewest,
    /// Lexicographic by id
    ById,
    /// Keep the listing order
    Source,
}

fn newest_first(a: &ParsedItem, b: &ParsedItem) -> Ordering {
    match (a.date.parsed, b.date.parsed) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

/// Sort `items` by `order`. The sort is stable.
pub fn sort_items(mut items: Vec<ParsedItem>, order: SortOrder) -> Vec<ParsedItem> {
    match order {
        SortOrder::Newest => items.sort_by(newest_first),
        SortOrder::PinnedThenNewest => {
            items.sort_by(|a, b| b.pinned.cmp(&a.pinned).then_with(|| newest_first(a, b)))
        }
        SortOrder::ById => items.sort_by(|a, b| a.id.cmp(&b.id)),
        SortOrder::Source => {}
    }
    items
}

/// Ephemeral view state of a listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    /// Active category tab
    pub category: String,
    /// Search box text
    pub query: String,
    /// Id of the item shown in the modal
    pub selected: Option<String>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            query: String::new(),
            selected: None,
        }
    }
}

impl DisplayState {
    /// Filtered and sorted view of `items`.
    pub fn visible(&self, items: &[ParsedItem], order: SortOrder) -> Vec<ParsedItem> {
        sort_items(filter_items(items, &self.category, &self.query), order)
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The selected item, if it is still present.
    pub fn selected_in<'a>(&self, items: &'a [ParsedItem]) -> Option<&'a ParsedItem> {
        let id = self.selected.as_deref()?;
        items.iter().find(|item| item.id == id)
    }

    /// Fall back to `"All"` when the active category is not in `options`.
    ///
    /// Returns whether the category changed.
    pub fn reconcile(&mut self, options: &[String]) -> bool {
        if options.iter().any(|c| *c == self.category) {
            return false;
        }
        self.category = ALL_CATEGORY.to_string();
        true
    }

    /// Reconcile against a finished load. While a load is pending or has
    /// failed the active category is kept.
    pub fn reconcile_loaded(&mut self, state: &LoadState<Vec<ParsedItem>>) -> bool {
        match state.loaded() {
            Some(items) => self.reconcile(&category_options(items)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemDate;

    fn item(id: &str, category: &str, date: &str, pinned: bool) -> ParsedItem {
        ParsedItem {
            id: id.to_string(),
            title: format!("Title {}", id),
            category: category.to_string(),
            date: ItemDate::new(date),
            description: format!("About {}", id),
            media: Vec::new(),
            pinned,
        }
    }

    fn ids(items: &[ParsedItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_category_options_first_appearance() {
        let items = vec![
            item("a", "Sports", "", false),
            item("b", "Sports", "", false),
            item("c", "Arts", "", false),
            item("d", "", "", false),
        ];
        assert_eq!(category_options(&items), vec!["All", "Sports", "Arts"]);
        assert_eq!(category_options::<ParsedItem>(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let items = vec![
            item("z", "Exams", "", false),
            item("a", "Events", "", false),
            item("m", "Exams", "", false),
        ];
        assert_eq!(filter_items(&items, "All", ""), items);
    }

    #[test]
    fn test_filter_by_category_is_exact_subset() {
        let items = vec![
            item("z", "Exams", "", false),
            item("a", "Events", "", false),
            item("m", "Exams", "", false),
        ];
        let exams = filter_items(&items, "Exams", "");
        assert_eq!(ids(&exams), vec!["z", "m"]);
        assert!(exams.iter().all(|i| i.category == "Exams"));
        assert!(filter_items(&items, "exams", "").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let mut items = vec![item("a", "X", "", false), item("b", "X", "", false)];
        items[1].description = "Annual SPORTS meet".to_string();

        assert_eq!(ids(&filter_items(&items, "All", "sports")), vec!["b"]);
        assert_eq!(ids(&filter_items(&items, "All", "TITLE A")), vec!["a"]);
        assert_eq!(ids(&filter_items(&items, "All", "  ")), vec!["a", "b"]);
        assert!(filter_items(&items, "All", "nothing").is_empty());
    }

    #[test]
    fn test_newest_first_with_undated_last() {
        let items = vec![
            item("b", "", "not a date", false),
            item("c", "", "2024-01-01", false),
            item("a", "", "someday", false),
            item("d", "", "2024-06-01", false),
        ];
        let sorted = sort_items(items, SortOrder::Newest);
        assert_eq!(ids(&sorted), vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn test_pinned_before_unpinned() {
        let items = vec![
            item("1", "", "2024-06-01", false),
            item("2", "", "2023-01-01", true),
            item("3", "", "2024-03-01", false),
            item("4", "", "2024-02-01", true),
        ];
        let sorted = sort_items(items, SortOrder::PinnedThenNewest);
        assert_eq!(ids(&sorted), vec!["4", "2", "1", "3"]);

        let first_unpinned = sorted.iter().position(|i| !i.pinned).unwrap();
        assert!(sorted[first_unpinned..].iter().all(|i| !i.pinned));
    }

    #[test]
    fn test_by_id_and_source_orders() {
        let items = vec![item("b", "", "", false), item("a", "", "", false)];
        assert_eq!(ids(&sort_items(items.clone(), SortOrder::ById)), vec!["a", "b"]);
        assert_eq!(ids(&sort_items(items, SortOrder::Source)), vec!["b", "a"]);
    }

    #[test]
    fn test_display_state() {
        let items = vec![
            item("a", "Exams", "2024-01-01", false),
            item("b", "Events", "2024-02-01", true),
        ];
        let mut state = DisplayState::default();
        assert_eq!(ids(&state.visible(&items, SortOrder::PinnedThenNewest)), vec!["b", "a"]);

        state.category = "Exams".to_string();
        assert_eq!(ids(&state.visible(&items, SortOrder::Newest)), vec!["a"]);

        state.select("b");
        assert_eq!(state.selected_in(&items).map(|i| i.id.as_str()), Some("b"));
        state.close();
        assert!(state.selected_in(&items).is_none());

        state.category = "Sports".to_string();
        state.reconcile(&category_options(&items));
        assert_eq!(state.category, "All");
    }

    #[test]
    fn test_category_kept_across_reload() {
        let mut state = DisplayState {
            category: "Exams".to_string(),
            ..DisplayState::default()
        };

        assert!(!state.reconcile_loaded(&LoadState::Loading));
        assert!(!state.reconcile_loaded(&LoadState::Failed("offline".to_string())));
        assert_eq!(state.category, "Exams");

        let reloaded = LoadState::Loaded(vec![item("a", "Exams", "", false)]);
        assert!(!state.reconcile_loaded(&reloaded));
        assert_eq!(state.category, "Exams");

        let without_exams = LoadState::Loaded(vec![item("a", "Events", "", false)]);
        assert!(state.reconcile_loaded(&without_exams));
        assert_eq!(state.category, "All");
    }

    #[test]
    fn test_padded_category_folder_matches_its_tab() {
        let items = vec![item("c", "Arts ", "", false), item("d", "Sports", "", false)];
        let options = category_options(&items);
        assert_eq!(options, vec!["All", "Arts", "Sports"]);
        assert_eq!(ids(&filter_items(&items, &options[1], "")), vec!["c"]);
    }

    #[test]
    fn test_faculty_is_listable() {
        let member = FacultyMember {
            id: 1,
            name: "Mrs. Lina Patel".to_string(),
            position: "Lect.(LB)".to_string(),
            department: "Chemistry".to_string(),
            image: String::new(),
            email: String::new(),
            phone: String::new(),
            bio: String::new(),
        };
        let staff = FacultyMember {
            department: String::new(),
            name: "Agash Bai".to_string(),
            ..member.clone()
        };
        let members = vec![member, staff];

        assert_eq!(category_options(&members), vec!["All", "Chemistry"]);
        assert_eq!(filter_items(&members, "All", "lect").len(), 2);
        assert_eq!(filter_items(&members, "Chemistry", "").len(), 1);
    }
}
