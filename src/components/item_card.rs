//! Item Card Component

use leptos::prelude::*;
use lost_found_core::Item;

use crate::context::AppContext;

/// One found item with its remove control
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = AppContext::expect();
    let id = item.id;
    let meta = item.meta_line();
    let alt = item.label.clone();
    let title = item.label;
    let image = item.image_ref;

    view! {
        <div class="item-card">
            <div class="card-image-wrapper">
                <img src=image alt=alt />
            </div>
            <div class="card-content">
                <h3 class="card-title">{title}</h3>
                <p class="card-meta">{meta}</p>
                <button class="remove-btn" on:click=move |_| ctx.remove_item(id)>
                    "Remove Item"
                </button>
            </div>
        </div>
    }
}
