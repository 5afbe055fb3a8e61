//! Read-only queries and aggregates over collections and items.
//!
//! Every function here is total: empty input yields an empty result,
//! zero, or `None`.
//!
//! Maximum searches keep the FIRST element that reaches the maximum; a later
//! element only wins if it is strictly greater.

pub mod search;

use crate::core::{Collection, Item};
pub use search::{contains_ignore_case, item_matches};

/// A favorite item with its position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteEntry<'a> {
    pub item: &'a Item,
    pub collection_index: usize,
    pub item_index: usize,
}

/// The collection holding the most items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryActivity {
    pub name: String,
    pub count: usize,
}

/// Items whose name or description contains `query`, ignoring case.
///
/// An empty query returns every item in order.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    items.iter().filter(|item| item_matches(item, query)).collect()
}

pub fn sum_trending_price<'a>(items: impl IntoIterator<Item = &'a Item>) -> u64 {
    items
        .into_iter()
        .fold(0u64, |total, item| total.saturating_add(item.trending_price))
}

/// Sum of every item price across all collections.
pub fn total_value(collections: &[Collection]) -> u64 {
    sum_trending_price(collections.iter().flat_map(|c| c.items.iter()))
}

/// Favorites in collection order, then item order.
pub fn favorite_items(collections: &[Collection]) -> Vec<FavoriteEntry<'_>> {
    let mut results = Vec::new();
    for (collection_index, collection) in collections.iter().enumerate() {
        for (item_index, item) in collection.items.iter().enumerate() {
            if item.is_favorite {
                results.push(FavoriteEntry {
                    item,
                    collection_index,
                    item_index,
                });
            }
        }
    }
    results
}

pub fn max_by_trending_price<'a>(items: impl IntoIterator<Item = &'a Item>) -> Option<&'a Item> {
    first_max_by_key(items, |item: &&Item| item.trending_price)
}

/// Highest priced item over all collections.
pub fn most_valuable_item(collections: &[Collection]) -> Option<&Item> {
    max_by_trending_price(collections.iter().flat_map(|c| c.items.iter()))
}

pub fn most_active_category(collections: &[Collection]) -> Option<CategoryActivity> {
    first_max_by_key(collections, |c: &&Collection| c.item_count()).map(|collection| CategoryActivity {
        name: collection.name.clone(),
        count: collection.item_count(),
    })
}

// `Iterator::max_by_key` returns the last maximum; ties must go to the first.
fn first_max_by_key<T, K, I, F>(iter: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut best: Option<(K, T)> = None;
    for candidate in iter {
        let k = key(&candidate);
        let replace = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((k, candidate));
        }
    }
    best.map(|(_, value)| value)
}

/// Profile statistics for a set of collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub collection_count: usize,
    pub item_count: usize,
    pub total_value: u64,
    pub most_valuable_item: Option<Item>,
    pub most_active_category: Option<CategoryActivity>,
}

impl CatalogSummary {
    pub fn from_collections(collections: &[Collection]) -> Self {
        Self {
            collection_count: collections.len(),
            item_count: collections.iter().map(Collection::item_count).sum(),
            total_value: total_value(collections),
            most_valuable_item: most_valuable_item(collections).cloned(),
            most_active_category: most_active_category(collections),
        }
    }
}
