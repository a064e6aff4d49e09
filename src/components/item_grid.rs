//! Item Grid Component
//!
//! Either the card grid or the empty-state panel, never both.

use leptos::prelude::*;
use lost_found_core::DisplayMode;

use crate::components::{EmptyState, ItemCard};
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = AppContext::expect();

    move || {
        let display = ctx.store.controller().read().display();
        match display {
            DisplayMode::Grid(items) => view! {
                <div id="itemsGrid" class="items-grid">
                    {items.into_iter().map(|item| view! { <ItemCard item=item /> }).collect_view()}
                </div>
            }
            .into_any(),
            DisplayMode::Empty => view! { <EmptyState /> }.into_any(),
        }
    }
}
