//! Category Filter Component
//!
//! Filter button row for the items grid. Selection is a pure state
//! update; no request is re-issued when the filter changes.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// "All" button plus one button per backend-supplied category
#[component]
pub fn CategoryFilter() -> impl IntoView {
    let store = use_app_store();

    let all_class = move || {
        if store.selected_category().get().is_none() {
            "category-btn active"
        } else {
            "category-btn"
        }
    };

    view! {
        <div class="category-filter">
            <button
                class=all_class
                on:click=move |_| store.selected_category().set(None)
            >
                "All"
            </button>
            <For
                each=move || store.categories().get()
                key=|category| category.clone()
                children=move |category: String| {
                    let selected = category.clone();
                    let btn_class = {
                        let category = category.clone();
                        move || {
                            if store.selected_category().get().as_deref() == Some(category.as_str()) {
                                "category-btn active"
                            } else {
                                "category-btn"
                            }
                        }
                    };

                    view! {
                        <button
                            class=btn_class
                            on:click=move |_| store.selected_category().set(Some(selected.clone()))
                        >
                            {category.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
