//! Application Context
//!
//! Copyable handle provided via the Leptos Context API. Components route every
//! user event through it so the controller stays the single mutator.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::{is_image_type, AppConfig, ItemId};
use web_sys::FileList;

use crate::dialog::BrowserDialogs;
use crate::store::{store_selected_file, store_set_selected_file, AppStateStoreFields, AppStore};
use crate::upload;

/// App-wide state and event handlers
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller and selected file
    pub store: AppStore,
    config: StoredValue<AppConfig>,
    /// Hidden file input inside the upload modal
    pub file_input: NodeRef<Input>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig, file_input: NodeRef<Input>) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            file_input,
        }
    }

    /// Context provided by `App`
    pub fn expect() -> Self {
        use_context::<AppContext>().expect("AppContext should be provided")
    }

    fn upload_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.upload_delay_ms)
    }

    // ========================
    // Search & Tags
    // ========================

    pub fn set_query(&self, query: String) {
        self.store.controller().write().set_query(query);
    }

    pub fn select_tag(&self, tag: &str) {
        self.store.controller().write().select_tag(tag);
    }

    // ========================
    // Removal
    // ========================

    pub fn remove_item(&self, id: ItemId) {
        let outcome = self.store.controller().write().remove_item(id, &BrowserDialogs);
        match outcome {
            Ok(outcome) => log::debug!("remove {}: {:?}", id, outcome),
            Err(e) => log::error!("remove {} failed: {}", id, e),
        }
    }

    // ========================
    // Upload Modal
    // ========================

    pub fn open_upload(&self) {
        self.store.controller().write().open_upload();
    }

    pub fn close_upload(&self) {
        self.store.controller().write().close_upload();
    }

    pub fn open_file_picker(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.click();
        }
    }

    /// Mirror the file input's current file into the store
    pub fn refresh_selected_file(&self) {
        let selected = self
            .file_input
            .get_untracked()
            .and_then(|input| upload::first_file(&input))
            .map(|file| upload::describe(&file));
        store_set_selected_file(&self.store, selected);
    }

    /// Hand files dropped on the drop zone to the file input; non-images are ignored
    pub fn assign_files(&self, files: &FileList) {
        let Some(file) = files.get(0) else {
            return;
        };
        if !is_image_type(&file.type_()) {
            log::warn!("ignoring dropped {:?} of type {:?}", file.name(), file.type_());
            return;
        }
        if let Some(input) = self.file_input.get_untracked() {
            input.set_files(Some(files));
            self.refresh_selected_file();
        }
    }

    fn clear_selected_file(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
        store_set_selected_file(&self.store, None);
    }

    /// Start the simulated analysis; completes after the configured delay
    pub fn submit_upload(&self) {
        let selected = store_selected_file(&self.store);
        let submitted = self
            .store
            .controller()
            .write()
            .submit_upload(selected.as_ref(), &BrowserDialogs);
        let ticket = match submitted {
            Ok(ticket) => ticket,
            Err(e) => {
                log::warn!("upload not started: {}", e);
                return;
            }
        };

        let file = self.file_input.get_untracked().and_then(|input| upload::first_file(&input));
        let delay = self.upload_delay_ms();
        let ctx = *self;
        spawn_local(async move {
            let bytes = match file {
                Some(file) => upload::read_bytes(&file).await.unwrap_or_else(|e| {
                    log::warn!("{}", e);
                    Vec::new()
                }),
                None => Vec::new(),
            };
            upload::simulated_latency(delay).await;

            let finished = ctx
                .store
                .controller()
                .write()
                .finish_upload(ticket, &bytes, upload::now_ms(), &BrowserDialogs);
            match finished {
                Ok(item) => {
                    log::info!("[UPLOAD] added item {} ({})", item.id, item.label);
                    ctx.clear_selected_file();
                }
                Err(e) => log::error!("[UPLOAD] ticket {} failed: {}", ticket.id(), e),
            }
        });
    }
}
