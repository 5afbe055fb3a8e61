// ============================================================================
// CollectionDB Library
// ============================================================================

//! In-memory catalogue of personal item collections.
//!
//! A [`CollectionStore`] holds the session's collections and notifies
//! observers after every mutation; the functions in [`query`] compute
//! search results and statistics from its current state.
//!
//! # Examples
//!
//! ```
//! use collectiondb::{Collection, CollectionStore, ItemDraft, query};
//!
//! let mut store = CollectionStore::new(vec![Collection::new("c1", "Watches", "", "")]);
//! let changes = store.subscribe();
//!
//! store.add_item(0, ItemDraft::new("Speedmaster", "Moonwatch", 5200));
//! store.add_item(0, ItemDraft::new("Seamaster", "Diver", 3100));
//!
//! assert!(changes.has_changed().unwrap());
//! assert_eq!(query::total_value(store.collections()), 8300);
//! assert_eq!(query::filter_items(&store.collections()[0].items, "MOON").len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod directory;
pub mod facade;
pub mod query;
pub mod storage;

pub use config::CatalogConfig;
pub use crate::core::{CatalogError, Collection, CollectionDraft, Item, ItemDraft, PriceField, Result};
pub use directory::{StoreDirectory, StoreLink};
pub use facade::Catalog;
pub use query::{CatalogSummary, CategoryActivity, FavoriteEntry};
pub use storage::{ChangeKind, CollectionStore, SeedLoader, StoreChange};
