//! Search Bar Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Free-text search over label, description and recency
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = AppContext::expect();

    view! {
        <div class="search-bar">
            <input
                id="searchInput"
                type="search"
                placeholder="Search for wallets, keys, bottles..."
                prop:value=move || ctx.store.controller().read().query().to_string()
                on:input=move |ev| ctx.set_query(event_target_value(&ev))
            />
        </div>
    }
}
