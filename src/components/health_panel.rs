//! Health Panel Component
//!
//! Backend status summary: status badge, version, environment and demo
//! metrics, plus the advertised feature tags.

use leptos::prelude::*;

use crate::format::{format_timestamp, format_uptime};
use crate::models::HealthStatus;
use crate::store::{use_app_store, AppStateStoreFields};

/// Health summary section, rendered once the health snapshot is loaded
#[component]
pub fn HealthPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="health-status">
            <h2>"Backend Status"</h2>
            {move || store.health().get().map(|health| {
                let HealthStatus { status, version, features, metrics, .. } = health;
                let uptime = format_uptime(metrics.uptime_seconds);
                let last_request = metrics
                    .last_request
                    .as_deref()
                    .map(format_timestamp)
                    .unwrap_or_else(|| "N/A".to_string());

                view! {
                    <div class="status-details">
                        <p><strong>"Status: "</strong><span class="badge">{status}</span></p>
                        <p><strong>"Version: "</strong>{version}</p>
                        <p><strong>"Environment: "</strong><span class="env-badge">{metrics.environment.clone()}</span></p>
                        <div class="metrics">
                            <strong>"Demo Metrics:"</strong>
                            <ul>
                                <li>"Total Requests: " {metrics.total_requests}</li>
                                <li>"Uptime: " {uptime}</li>
                                <li>"Last Request: " {last_request}</li>
                            </ul>
                        </div>
                        <div class="features">
                            <strong>"Features:"</strong>
                            <div class="feature-tags">
                                <For
                                    each=move || features.clone()
                                    key=|feature| feature.clone()
                                    children=move |feature: String| {
                                        view! { <span class="feature-tag">{feature}</span> }
                                    }
                                />
                            </div>
                        </div>
                    </div>
                }
            })}
        </section>
    }
}
