//! Search Filter
//!
//! Case-insensitive substring match over the searchable text of an item.

use crate::item::Item;

/// True if the item's label, description or recency label contains `query`,
/// ignoring case. An empty query matches everything.
pub fn matches_query(item: &Item, query: &str) -> bool {
    let needle = query.to_lowercase();
    contains_lowered(item, &needle)
}

fn contains_lowered(item: &Item, needle: &str) -> bool {
    [&item.label, &item.description, &item.found_at]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Items matching `query`, in list order
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let needle = query.to_lowercase();
    items.iter().filter(|item| contains_lowered(item, &needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::demo_items;

    fn ids(items: &[&Item]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let items = demo_items();
        assert_eq!(ids(&filter_items(&items, "")), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_label_match() {
        let items = demo_items();
        assert_eq!(ids(&filter_items(&items, "key")), vec![3]);
    }

    #[test]
    fn test_case_insensitive() {
        let items = demo_items();
        assert_eq!(ids(&filter_items(&items, "WALLET")), vec![1]);
        assert_eq!(ids(&filter_items(&items, "hYdRo")), vec![2]);
    }

    #[test]
    fn test_description_match() {
        let items = demo_items();
        assert_eq!(ids(&filter_items(&items, "chemistry")), vec![5]);
    }

    #[test]
    fn test_recency_label_match() {
        let items = demo_items();
        assert_eq!(ids(&filter_items(&items, "today")), vec![3, 5]);
    }

    #[test]
    fn test_recency_label_is_searchable() {
        let items = demo_items();
        let labels: Vec<&str> = filter_items(&items, "days").iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Wallet", "AirPods"]);
    }

    #[test]
    fn test_no_match() {
        let items = demo_items();
        assert!(filter_items(&items, "umbrella").is_empty());
        assert!(!matches_query(&items[0], "umbrella"));
    }

    #[test]
    fn test_matches_agrees_with_filter() {
        let items = demo_items();
        for query in ["", "a", "case", "days", "x", "Mario"] {
            let expected: Vec<u64> = items
                .iter()
                .filter(|i| matches_query(i, query))
                .map(|i| i.id)
                .collect();
            assert_eq!(ids(&filter_items(&items, query)), expected, "query {query:?}");
        }
    }
}
