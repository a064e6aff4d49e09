//! Lost & Found Core
//!
//! Domain layer for the lost & found browser:
//! - item: found-item records and demo seed data
//! - filter: search matching over the item list
//! - tags: suggested quick-filter tags
//! - controller: the view controller owning list, query and upload state
//! - service: data service seam (mocked in-memory)
//! - prompt: blocking confirm/alert seam
//!
//! Nothing here touches the DOM, so everything runs under plain `cargo test`.

mod config;
mod controller;
mod error;
mod filter;
mod item;
mod prompt;
mod service;
mod tags;

pub use config::{AppConfig, Messages, MockClassification};
pub use controller::{is_image_type, DisplayMode, RemoveOutcome, SelectedFile, UploadPhase, UploadTicket, ViewController};
pub use error::{LostFoundError, LostFoundResult};
pub use filter::{filter_items, matches_query};
pub use item::{demo_items, Item, ItemId};
pub use prompt::Prompter;
pub use service::{ItemService, MockItemService};
pub use tags::{is_all, normalize_tags, ALL_TAG, DEFAULT_TAGS};
