//! Tag Bar Component
//!
//! Pill buttons that write a suggested tag into the search query.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn TagBar() -> impl IntoView {
    let ctx = AppContext::expect();
    // The tag set is fixed for the lifetime of the page
    let tags = ctx.store.controller().read_untracked().tags().to_vec();

    view! {
        <div id="tagsContainer" class="tags-container">
            <span class="tag-label">"Suggested:"</span>
            {tags.into_iter().map(|tag| {
                let label = tag.clone();
                let name = tag.clone();
                let is_active = move || ctx.store.controller().read().is_tag_active(&name);
                view! {
                    <button
                        class=move || if is_active() { "tag active" } else { "tag" }
                        on:click=move |_| ctx.select_tag(&tag)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
