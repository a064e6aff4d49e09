//! Upload Helpers
//!
//! Reading the picked file and the simulated analysis latency.

use gloo_timers::future::TimeoutFuture;
use lost_found_core::SelectedFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// First file of a file input
pub fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Name and size of a DOM file
pub fn describe(file: &File) -> SelectedFile {
    SelectedFile {
        name: file.name(),
        size: file.size() as u64,
    }
}

/// Raw bytes of the file via `Blob.arrayBuffer()`
pub async fn read_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("reading {}: {:?}", file.name(), e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Stand-in for the classification round trip
pub async fn simulated_latency(delay_ms: u32) {
    TimeoutFuture::new(delay_ms).await;
}

/// Current client time in milliseconds
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
