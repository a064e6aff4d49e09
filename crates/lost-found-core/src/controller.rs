//! View Controller
//!
//! Owns the item list, the search query, tag highlighting and the upload
//! surface. The UI calls one method per user event and re-renders from
//! `display()`.

use log::{debug, info, warn};

use crate::config::{AppConfig, Messages};
use crate::error::{LostFoundError, LostFoundResult};
use crate::filter::filter_items;
use crate::item::{Item, ItemId};
use crate::prompt::Prompter;
use crate::service::ItemService;
use crate::tags::{is_all, normalize_tags, ALL_TAG};

/// What the item area shows. Exactly one of the two is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    /// Cards for the matching items, in list order (never empty)
    Grid(Vec<Item>),
    /// Nothing matches: show the security office panel
    Empty,
}

/// Result of a remove request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Declined,
    NotFound,
}

/// Handle for the single in-flight upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    /// Simulated analysis running
    Processing(UploadTicket),
}

/// The file picked in the upload surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// True for MIME types the upload surface accepts (`image/*`)
pub fn is_image_type(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

#[derive(Debug, Clone)]
pub struct ViewController<S> {
    service: S,
    items: Vec<Item>,
    query: String,
    /// Highlighted tag; `None` once the user types into the search box
    active_tag: Option<String>,
    tags: Vec<String>,
    messages: Messages,
    upload_open: bool,
    upload_phase: UploadPhase,
    next_ticket: u64,
}

impl<S: ItemService> ViewController<S> {
    pub fn new(service: S, config: &AppConfig) -> Self {
        Self {
            service,
            items: Vec::new(),
            query: String::new(),
            active_tag: Some(ALL_TAG.to_string()),
            tags: normalize_tags(&config.suggested_tags),
            messages: config.messages.clone(),
            upload_open: false,
            upload_phase: UploadPhase::Idle,
            next_ticket: 1,
        }
    }

    /// Load the seed list and show everything with `All` highlighted
    pub fn initialize(&mut self) -> LostFoundResult<()> {
        self.items = self.service.list_items()?;
        self.query.clear();
        self.active_tag = Some(ALL_TAG.to_string());
        info!("initialized with {} items", self.items.len());
        Ok(())
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tag.as_deref() == Some(tag)
    }

    /// `filter(items, query)`
    pub fn visible_items(&self) -> Vec<&Item> {
        filter_items(&self.items, &self.query)
    }

    pub fn display(&self) -> DisplayMode {
        let visible = self.visible_items();
        if visible.is_empty() {
            DisplayMode::Empty
        } else {
            DisplayMode::Grid(visible.into_iter().cloned().collect())
        }
    }

    pub fn is_upload_open(&self) -> bool {
        self.upload_open
    }

    pub fn upload_phase(&self) -> UploadPhase {
        self.upload_phase
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.upload_phase, UploadPhase::Processing(_))
    }

    // ========================
    // Search & Tags
    // ========================

    /// Manual search entry. Clears tag highlighting, even if `query` is a tag name.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.active_tag = None;
        debug!("query set to {:?}", self.query);
    }

    pub fn select_tag(&mut self, tag: &str) {
        if is_all(tag) {
            self.query.clear();
        } else {
            self.query = tag.to_string();
        }
        self.active_tag = Some(tag.to_string());
        debug!("tag {:?} selected", tag);
    }

    // ========================
    // Removal
    // ========================

    /// Ask for confirmation, then drop the item. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: ItemId, prompter: &impl Prompter) -> LostFoundResult<RemoveOutcome> {
        if !self.items.iter().any(|item| item.id == id) {
            debug!("remove ignored, item {} not in list", id);
            return Ok(RemoveOutcome::NotFound);
        }
        if !prompter.confirm(&self.messages.remove_confirm) {
            return Ok(RemoveOutcome::Declined);
        }
        match self.service.delete_item(id) {
            Ok(()) | Err(LostFoundError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }
        self.items.retain(|item| item.id != id);
        info!("removed item {}, {} left", id, self.items.len());
        Ok(RemoveOutcome::Removed)
    }

    // ========================
    // Upload
    // ========================

    pub fn open_upload(&mut self) {
        self.upload_open = true;
    }

    /// Hide the upload surface. A pending upload still completes.
    pub fn close_upload(&mut self) {
        self.upload_open = false;
    }

    /// Start the simulated analysis for `file`.
    ///
    /// Without a file the user is alerted once and nothing changes. While an
    /// upload is pending further submissions are rejected.
    pub fn submit_upload(
        &mut self,
        file: Option<&SelectedFile>,
        prompter: &impl Prompter,
    ) -> LostFoundResult<UploadTicket> {
        let Some(file) = file else {
            prompter.alert(&self.messages.missing_file);
            return Err(LostFoundError::NoFileSelected);
        };
        if self.is_processing() {
            warn!("upload of {:?} rejected, another upload is pending", file.name);
            return Err(LostFoundError::UploadInProgress);
        }
        let ticket = UploadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.upload_phase = UploadPhase::Processing(ticket);
        info!("analyzing {:?} ({} bytes), ticket {}", file.name, file.size, ticket.0);
        Ok(ticket)
    }

    /// Complete the pending upload once the simulated latency has elapsed.
    ///
    /// The new item goes to the front, the filter resets so the full list is
    /// shown, and the upload surface closes.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        image: &[u8],
        now_ms: u64,
        prompter: &impl Prompter,
    ) -> LostFoundResult<Item> {
        if self.upload_phase != UploadPhase::Processing(ticket) {
            return Err(LostFoundError::StaleUpload(ticket.0));
        }
        self.upload_phase = UploadPhase::Idle;
        let item = match self.service.create_item(image, now_ms) {
            Ok(item) => item,
            Err(e) => {
                warn!("upload ticket {} failed: {}", ticket.0, e);
                prompter.alert(&self.messages.upload_failed);
                return Err(e);
            }
        };
        self.items.insert(0, item.clone());
        self.query.clear();
        self.active_tag = Some(ALL_TAG.to_string());
        self.upload_open = false;
        info!("item {} identified as {:?}", item.id, item.label);
        prompter.alert(&format!("Item identified as \"{}\" and added!", item.label));
        Ok(item)
    }
}
