//! Items Grid Component
//!
//! Catalog items passing the current filter, each rendered as an
//! external link card.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{filter_by_category, use_app_store, AppStateStoreFields};

/// Filtered items grid
#[component]
pub fn ItemsGrid() -> impl IntoView {
    let store = use_app_store();

    let visible_items = move || {
        let selected = store.selected_category().get();
        filter_by_category(&store.items().get(), selected.as_deref())
    };

    view! {
        <div class="items-grid">
            <For
                each=visible_items
                key=|item| item.item_id
                children=move |item: Item| {
                    view! {
                        <a
                            href=item.url.clone()
                            target="_blank"
                            rel="noopener"
                            class="item-card"
                        >
                            <div class="item-category">{item.category.clone()}</div>
                            <h3>{item.name.clone()}</h3>
                            <p>{item.message.clone()}</p>
                        </a>
                    }
                }
            />
        </div>
    }
}
