//! UI Components
//!
//! Reusable Leptos components.

mod category_filter;
mod health_panel;
mod items_grid;

pub use category_filter::CategoryFilter;
pub use health_panel::HealthPanel;
pub use items_grid::ItemsGrid;
