//! StackView Frontend App
//!
//! Root view controller. Joins the three startup fetches and renders
//! exactly one of three views: loading, error, or content.

use futures::try_join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{CategoryFilter, HealthPanel, ItemsGrid};
use crate::config::ApiConfig;
use crate::error::AppError;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: Result<ApiConfig, AppError>) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let docs_url = config.as_ref().ok().map(|config| config.docs_url());

    // Load everything on mount. All three endpoints must succeed before
    // the content view is shown; the first failure wins and any partial
    // results are discarded.
    Effect::new(move |_| {
        let config = match config.clone() {
            Ok(config) => config,
            Err(err) => {
                set_error.set(Some(err));
                set_loading.set(false);
                return;
            }
        };
        spawn_local(async move {
            match try_join!(
                api::fetch_health(&config),
                api::fetch_items(&config),
                api::fetch_categories(&config),
            ) {
                Ok((health, items, categories)) => {
                    web_sys::console::log_1(
                        &format!(
                            "[APP] Loaded {} items, {} categories",
                            items.len(),
                            categories.len()
                        )
                        .into(),
                    );
                    store.health().set(Some(health));
                    store.items().set(items);
                    store.categories().set(categories);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] {}", err).into());
                    set_error.set(Some(err));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <header>
            <h1>"StackView"</h1>
            <p class="subtitle">"A demonstration of containerized frontend-backend integration"</p>
        </header>

        <main>
            {move || if loading.get() {
                view! {
                    <div class="loading">
                        <div class="loading-spinner"></div>
                        <p>"Connecting to backend..."</p>
                    </div>
                }.into_any()
            } else if let Some(err) = error.get() {
                let (heading, message) = if err.is_config() {
                    ("Configuration Error", err.to_string())
                } else {
                    ("Connection Error", format!("Failed to connect to backend: {}", err))
                };
                view! {
                    <div class="error">
                        <h2>{heading}</h2>
                        <p>{message}</p>
                        <p class="error-help">"Make sure both frontend and backend services are running."</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <HealthPanel />

                    <section class="demo-items">
                        <h2>"Technologies Used"</h2>
                        <CategoryFilter />
                        <ItemsGrid />
                    </section>
                }.into_any()
            }}
        </main>

        <footer>
            {docs_url.map(|url| view! {
                <p>
                    "This demo shows a WebAssembly frontend communicating with an HTTP backend. "
                    "Check out the "
                    <a href=url target="_blank" rel="noopener">"API Documentation"</a>
                    " for more details."
                </p>
            })}
        </footer>
    }
}
