//! Drop Zone Component
//!
//! Click to open the file picker, or drop an image onto it.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::AppContext;

#[component]
pub fn DropZone() -> impl IntoView {
    let ctx = AppContext::expect();
    let (is_over, set_is_over) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if files.length() > 0 {
                ctx.assign_files(&files);
            }
        }
    };

    view! {
        <div
            id="dropzone"
            class=move || if is_over.get() { "dropzone active" } else { "dropzone" }
            on:click=move |_| ctx.open_file_picker()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <div class="dropzone-icon">"📷"</div>
            <p>"Click to choose a photo, or drop it here"</p>
        </div>
    }
}
