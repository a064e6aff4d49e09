//! Empty State Component
//!
//! Shown instead of the grid when the filter matches nothing.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn EmptyState() -> impl IntoView {
    let ctx = AppContext::expect();
    let messages = ctx.store.controller().read_untracked().messages().clone();

    view! {
        <div id="emptyState" class="empty-state">
            <div class="empty-state-icon">"🔍"</div>
            <h2>{messages.empty_title}</h2>
            <p>{messages.empty_body}</p>
        </div>
    }
}
