//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The fetched
//! backend state is written once after the startup join; the selected
//! category is the only field the UI mutates afterwards.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{HealthStatus, Item};

/// Fetched backend state plus the local filter selection
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Health snapshot from /api/health
    pub health: Option<HealthStatus>,
    /// Catalog items from /api/items, in backend order
    pub items: Vec<Item>,
    /// Filter button labels from /api/categories
    pub categories: Vec<String>,
    /// Currently selected category (None = all)
    pub selected_category: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Items passing the category filter, preserving fetched order.
/// No network involvement; filtering is entirely over local state.
pub fn filter_by_category(items: &[Item], selected: Option<&str>) -> Vec<Item> {
    match selected {
        Some(category) => items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect(),
        None => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(item_id: u32, category: &str) -> Item {
        Item {
            item_id,
            name: format!("Item {}", item_id),
            message: format!("Message {}", item_id),
            url: format!("https://example.com/{}", item_id),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_filter_keeps_matches_in_relative_order() {
        let items = vec![make_item(1, "a"), make_item(2, "b"), make_item(3, "a")];

        let filtered = filter_by_category(&items, Some("a"));

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].item_id, 1);
        assert_eq!(filtered[1].item_id, 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = vec![make_item(1, "a"), make_item(2, "b"), make_item(3, "a")];

        let once = filter_by_category(&items, Some("a"));
        let twice = filter_by_category(&once, Some("a"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_selection_returns_the_full_list_in_order() {
        let items = vec![make_item(1, "a"), make_item(2, "b"), make_item(3, "a")];

        // Selecting a category and then clearing it is just two pure reads;
        // clearing must restore the original list untouched.
        let _ = filter_by_category(&items, Some("b"));
        let all = filter_by_category(&items, None);

        assert_eq!(all, items);
    }

    #[test]
    fn test_unknown_category_yields_empty_list() {
        let items = vec![make_item(1, "a"), make_item(2, "b")];

        assert!(filter_by_category(&items, Some("c")).is_empty());
    }
}
