//! Lost & Found App
//!
//! Main application component: search, tag shortcuts, item grid and the
//! upload modal.

use leptos::html::Input;
use leptos::prelude::*;
use lost_found_core::{AppConfig, MockItemService, ViewController};
use reactive_stores::Store;

use crate::components::{ItemGrid, SearchBar, TagBar, UploadModal};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let service = MockItemService::new(config.seed(), config.classification.clone());
    let mut controller = ViewController::new(service, &config);
    if let Err(e) = controller.initialize() {
        log::error!("[APP] failed to load items: {}", e);
    }

    let store = Store::new(AppState::new(controller));
    let ctx = AppContext::new(store, config, NodeRef::<Input>::new());
    provide_context(ctx);

    let item_count = move || {
        let controller = ctx.store.controller().read();
        format!("{} of {} items", controller.visible_items().len(), controller.items().len())
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Lost & Found"</h1>
                <button id="uploadBtn" class="upload-btn" on:click=move |_| ctx.open_upload()>
                    "+ Report Found Item"
                </button>
            </header>

            <main class="main-content">
                <SearchBar />
                <TagBar />
                <ItemGrid />
                <p class="item-count">{item_count}</p>
            </main>

            <UploadModal />
        </div>
    }
}
