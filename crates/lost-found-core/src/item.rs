//! Item Entity
//!
//! A found object shown as a card in the grid.

use serde::{Deserialize, Serialize};

/// Item identifier. Uploads use the client clock in milliseconds.
pub type ItemId = u64;

/// A found-object record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Short label, e.g. "Wallet"
    pub label: String,
    /// Free-form description
    pub description: String,
    /// Recency label, e.g. "Today" or "2 days ago"
    pub found_at: String,
    /// Image URL or other reference the card renders
    pub image_ref: String,
}

impl Item {
    pub fn new(
        id: ItemId,
        label: impl Into<String>,
        description: impl Into<String>,
        found_at: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
            found_at: found_at.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Meta line shown under the card title
    pub fn meta_line(&self) -> String {
        format!("{} • {}", self.description, self.found_at)
    }
}

/// Demo data the mock service starts with
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new(1, "Wallet", "Black leather wallet, found near library", "2 days ago",
            "https://via.placeholder.com/300/333/FFF?text=Wallet"),
        Item::new(2, "Bottle", "Blue hydro flask", "Yesterday",
            "https://via.placeholder.com/300/0071e3/FFF?text=Bottle"),
        Item::new(3, "Keys", "Car keys with a Mario keychain", "Today",
            "https://via.placeholder.com/300/e30000/FFF?text=Keys"),
        Item::new(4, "AirPods", "White case with cat sticker", "3 days ago",
            "https://via.placeholder.com/300/eee/333?text=AirPods"),
        Item::new(5, "Notebook", "Chemistry 101 notes", "Today",
            "https://via.placeholder.com/300/f4a261/FFF?text=Notebook"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_items_have_unique_ids() {
        let items = demo_items();
        assert_eq!(items.len(), 5);
        let mut ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_meta_line() {
        let item = Item::new(9, "Phone", "Cracked screen", "Today", "img");
        assert_eq!(item.meta_line(), "Cracked screen • Today");
    }

    #[test]
    fn test_item_uses_camel_case_json() {
        let json = r#"{"id":7,"label":"Scarf","description":"Red wool","foundAt":"Today","imageRef":"scarf.png"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.found_at, "Today");
        assert_eq!(item.image_ref, "scarf.png");
    }
}
