//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use lost_found_core::{MockItemService, SelectedFile, ViewController};
use reactive_stores::Store;

/// Global application state
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Item list, query, tags and upload state
    pub controller: ViewController<MockItemService>,
    /// File currently picked in the upload modal
    pub selected_file: Option<SelectedFile>,
}

impl AppState {
    pub fn new(controller: ViewController<MockItemService>) -> Self {
        Self {
            controller,
            selected_file: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the selected file
pub fn store_set_selected_file(store: &AppStore, file: Option<SelectedFile>) {
    *store.selected_file().write() = file;
}

/// Current selection without subscribing
pub fn store_selected_file(store: &AppStore) -> Option<SelectedFile> {
    store.selected_file().get_untracked()
}
