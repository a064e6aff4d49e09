//! Browser Dialogs
//!
//! Blocking `window.confirm` / `window.alert` behind the core `Prompter` seam.

use lost_found_core::Prompter;

#[derive(Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Prompter for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("alert failed: {:?}", e);
            }
        }
    }
}
