//! UI Components
//!
//! Leptos components for the browsing page.

mod drop_zone;
mod empty_state;
mod item_card;
mod item_grid;
mod search_bar;
mod tag_bar;
mod upload_modal;

pub use drop_zone::DropZone;
pub use empty_state::EmptyState;
pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use search_bar::SearchBar;
pub use tag_bar::TagBar;
pub use upload_modal::UploadModal;
