//! Item Service
//!
//! The data service a real backend will provide. The only implementation
//! here is an in-memory mock with a canned classification result.

use log::debug;

use crate::config::MockClassification;
use crate::error::{LostFoundError, LostFoundResult};
use crate::item::{demo_items, Item, ItemId};

/// Data access for found items
pub trait ItemService {
    /// All items, newest first
    fn list_items(&self) -> LostFoundResult<Vec<Item>>;

    /// Delete an item by ID
    fn delete_item(&mut self, id: ItemId) -> LostFoundResult<()>;

    /// Classify an uploaded image and store the resulting item
    fn create_item(&mut self, image: &[u8], now_ms: u64) -> LostFoundResult<Item>;
}

/// In-memory service that labels every upload with the same mock result
#[derive(Debug, Clone)]
pub struct MockItemService {
    items: Vec<Item>,
    classification: MockClassification,
}

impl MockItemService {
    pub fn new(seed: Vec<Item>, classification: MockClassification) -> Self {
        Self { items: seed, classification }
    }

    /// Lowest id a new item may take; `None` once `ItemId::MAX` is in use
    fn next_free_id(&self) -> Option<ItemId> {
        match self.items.iter().map(|i| i.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }
}

impl Default for MockItemService {
    fn default() -> Self {
        Self::new(demo_items(), MockClassification::default())
    }
}

impl ItemService for MockItemService {
    fn list_items(&self) -> LostFoundResult<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn delete_item(&mut self, id: ItemId) -> LostFoundResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Err(LostFoundError::NotFound(id));
        }
        Ok(())
    }

    fn create_item(&mut self, image: &[u8], now_ms: u64) -> LostFoundResult<Item> {
        let floor = self.next_free_id().ok_or(LostFoundError::IdsExhausted)?;
        let id = now_ms.max(floor);
        let c = &self.classification;
        let item = Item::new(id, &c.label, &c.description, &c.found_at, &c.image_ref);
        debug!("mock classification of {} bytes -> {:?} (id {})", image.len(), item.label, id);
        self.items.insert(0, item.clone());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_returns_seed() {
        let service = MockItemService::default();
        assert_eq!(service.list_items().unwrap(), demo_items());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut service = MockItemService::default();
        assert_eq!(service.delete_item(999), Err(LostFoundError::NotFound(999)));
        assert_eq!(service.list_items().unwrap().len(), 5);
    }

    #[test]
    fn test_delete_item() {
        let mut service = MockItemService::default();
        service.delete_item(3).unwrap();
        let ids: Vec<ItemId> = service.list_items().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_create_uses_clock_and_mock_label() {
        let mut service = MockItemService::default();
        let item = service.create_item(b"jpeg", 1_700_000_000_000).unwrap();
        assert_eq!(item.id, 1_700_000_000_000);
        assert_eq!(item.label, "Backpack");
        assert_eq!(item.description, "Auto-detected: Grey Backpack");
        assert_eq!(item.found_at, "Just now");
        assert_eq!(service.list_items().unwrap()[0], item);
    }

    #[test]
    fn test_create_ids_unique_for_same_millisecond() {
        let mut service = MockItemService::default();
        let a = service.create_item(b"a", 1000).unwrap();
        let b = service.create_item(b"b", 1000).unwrap();
        assert_eq!(a.id, 1000);
        assert_eq!(b.id, 1001);
    }

    #[test]
    fn test_create_with_clock_behind_seed_ids() {
        let mut service = MockItemService::default();
        let item = service.create_item(&[], 0).unwrap();
        assert_eq!(item.id, 6);
    }

    #[test]
    fn test_create_fails_when_max_id_taken() {
        let seed = vec![Item::new(ItemId::MAX, "Phone", "Blue case", "Today", "p.png")];
        let mut service = MockItemService::new(seed, MockClassification::default());
        assert_eq!(service.create_item(b"x", 1_700_000_000_000), Err(LostFoundError::IdsExhausted));
        assert_eq!(service.list_items().unwrap().len(), 1);
    }
}
