//! Upload Modal Component
//!
//! Overlay with the drop zone and the "analyze" button. Stays mounted and is
//! hidden by class so the file input keeps its selection.

use leptos::prelude::*;

use crate::components::DropZone;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn UploadModal() -> impl IntoView {
    let ctx = AppContext::expect();
    let messages = ctx.store.controller().read_untracked().messages().clone();
    let idle_label = messages.upload_idle;
    let busy_label = messages.upload_busy;

    let is_open = move || ctx.store.controller().read().is_upload_open();
    let is_processing = move || ctx.store.controller().read().is_processing();
    let selected_name = move || {
        ctx.store
            .selected_file()
            .get()
            .map(|file| format!("Selected: {}", file.name))
            .unwrap_or_default()
    };

    view! {
        <div
            id="uploadModal"
            class=move || if is_open() { "modal-overlay" } else { "modal-overlay hidden" }
            on:click=move |_| ctx.close_upload()
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Report a Found Item"</h2>
                    <button id="closeModal" class="close-modal" on:click=move |_| ctx.close_upload()>
                        "×"
                    </button>
                </div>

                <DropZone />
                <input
                    id="fileInput"
                    type="file"
                    accept="image/*"
                    class="hidden"
                    node_ref=ctx.file_input
                    on:change=move |_| ctx.refresh_selected_file()
                />
                <p class="selected-file">{selected_name}</p>

                <button
                    id="confirmUpload"
                    class=move || if is_processing() { "confirm-upload processing" } else { "confirm-upload" }
                    prop:disabled=is_processing
                    on:click=move |_| ctx.submit_upload()
                >
                    {move || if is_processing() { busy_label.clone() } else { idle_label.clone() }}
                </button>
            </div>
        </div>
    }
}
