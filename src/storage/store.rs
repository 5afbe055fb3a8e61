use super::offsets::{move_offsets, remove_offsets};
use crate::core::model::generate_id;
use crate::core::{CatalogError, Collection, Item, ItemDraft, Result};
use log::debug;
use tokio::sync::watch;

/// What the last mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Initialized,
    Appended,
    Removed,
    Moved,
    /// Fields of the collection at `index` changed.
    CollectionEdited { index: usize },
    /// The item list of the collection at `collection` changed.
    ItemsEdited { collection: usize },
}

/// Notification published after every effective mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    pub revision: u64,
    pub kind: ChangeKind,
}

/// Authoritative, observable registry of all collections for a session.
///
/// All writes take `&mut self`, so there is exactly one writer and every
/// reader observes the state left by the last completed mutation. Each
/// mutation that changes something publishes one [`StoreChange`]; calls
/// that change nothing (out-of-range indices, empty offset sets) publish
/// nothing.
pub struct CollectionStore {
    collections: Vec<Collection>,
    revision: u64,
    notifier: watch::Sender<StoreChange>,
}

impl CollectionStore {
    /// Build a store holding `seed` in order. Duplicate ids are accepted.
    pub fn new(seed: Vec<Collection>) -> Self {
        let (notifier, _) = watch::channel(StoreChange {
            revision: 0,
            kind: ChangeKind::Initialized,
        });
        Self {
            collections: seed,
            revision: 0,
            notifier,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Receive a [`StoreChange`] after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<StoreChange> {
        self.notifier.subscribe()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> Vec<Collection> {
        self.collections.clone()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Collection> {
        self.collections.get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&Collection> {
        self.collections.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.collections.len(),
        })
    }

    pub fn item(&self, collection: usize, item: usize) -> Option<&Item> {
        self.collections.get(collection)?.items.get(item)
    }

    /// Position of the first item with `id`, as (collection, item).
    pub fn find_item(&self, id: &str) -> Option<(usize, usize)> {
        self.collections.iter().enumerate().find_map(|(c, collection)| {
            collection
                .items
                .iter()
                .position(|item| item.id == id)
                .map(|i| (c, i))
        })
    }

    // ------------------------------------------------------------------
    // Top-level list
    // ------------------------------------------------------------------

    pub fn append(&mut self, collection: Collection) {
        if self.collections.iter().any(|c| c.id == collection.id) {
            log::warn!("Appending collection with duplicate id '{}'", collection.id);
        }
        self.collections.push(collection);
        self.publish(ChangeKind::Appended);
    }

    /// Remove the collections at `offsets` in one update.
    ///
    /// Out-of-range offsets are skipped. Returns the number removed.
    pub fn remove_at(&mut self, offsets: impl IntoIterator<Item = usize>) -> usize {
        let removed = remove_offsets(&mut self.collections, offsets);
        if removed == 0 {
            debug!("remove_at: no offset in range, store unchanged");
        } else {
            self.publish(ChangeKind::Removed);
        }
        removed
    }

    /// Reorder collections; see [`move_offsets`] for the exact semantics.
    pub fn move_collections(&mut self, from: impl IntoIterator<Item = usize>, to: usize) -> bool {
        let moved = move_offsets(&mut self.collections, from, to);
        if moved {
            self.publish(ChangeKind::Moved);
        } else {
            debug!("move_collections: no offset in range, store unchanged");
        }
        moved
    }

    // ------------------------------------------------------------------
    // In-place edits
    // ------------------------------------------------------------------

    /// Mutate the collection at `index` in place and notify observers.
    ///
    /// Returns `false` without calling `edit` if `index` is out of range.
    pub fn update_collection<F>(&mut self, index: usize, edit: F) -> bool
    where
        F: FnOnce(&mut Collection),
    {
        let Some(collection) = self.collections.get_mut(index) else {
            debug!("update_collection: index {} out of range", index);
            return false;
        };
        edit(collection);
        self.publish(ChangeKind::CollectionEdited { index });
        true
    }

    /// Rename a collection. Existing items keep their old `collection_name`.
    pub fn rename_collection(&mut self, index: usize, name: impl Into<String>) -> bool {
        let name = name.into();
        self.update_collection(index, |collection| collection.name = name)
    }

    /// Append a new item built from `draft` to the collection at `collection`.
    ///
    /// The item gets a fresh id that no other item in the store uses, and
    /// the collection's current name. Returns the id, or `None` if the
    /// collection does not exist.
    pub fn add_item(&mut self, collection: usize, draft: ItemDraft) -> Option<String> {
        if collection >= self.collections.len() {
            debug!("add_item: collection {} out of range", collection);
            return None;
        }

        let id = generate_id(|candidate| self.find_item(candidate).is_some());
        let owner = &mut self.collections[collection];
        let item = Item::from_draft(id.clone(), draft, owner.name.clone());
        owner.items.push(item);

        self.publish(ChangeKind::ItemsEdited { collection });
        Some(id)
    }

    /// Remove items at `offsets` from one collection in a single update.
    pub fn remove_items_at(&mut self, collection: usize, offsets: impl IntoIterator<Item = usize>) -> usize {
        let Some(owner) = self.collections.get_mut(collection) else {
            debug!("remove_items_at: collection {} out of range", collection);
            return 0;
        };
        let removed = remove_offsets(&mut owner.items, offsets);
        if removed > 0 {
            self.publish(ChangeKind::ItemsEdited { collection });
        }
        removed
    }

    /// Reorder items within one collection, same semantics as [`Self::move_collections`].
    pub fn move_items(&mut self, collection: usize, from: impl IntoIterator<Item = usize>, to: usize) -> bool {
        let Some(owner) = self.collections.get_mut(collection) else {
            debug!("move_items: collection {} out of range", collection);
            return false;
        };
        let moved = move_offsets(&mut owner.items, from, to);
        if moved {
            self.publish(ChangeKind::ItemsEdited { collection });
        }
        moved
    }

    /// Mutate one item in place and notify observers.
    pub fn update_item<F>(&mut self, collection: usize, item: usize, edit: F) -> bool
    where
        F: FnOnce(&mut Item),
    {
        let Some(target) = self
            .collections
            .get_mut(collection)
            .and_then(|owner| owner.items.get_mut(item))
        else {
            debug!("update_item: ({}, {}) out of range", collection, item);
            return false;
        };
        edit(target);
        self.publish(ChangeKind::ItemsEdited { collection });
        true
    }

    pub fn set_favorite(&mut self, collection: usize, item: usize, favorite: bool) -> bool {
        self.update_item(collection, item, |target| target.is_favorite = favorite)
    }

    /// Flip the favorite flag. Returns the new value.
    pub fn toggle_favorite(&mut self, collection: usize, item: usize) -> Option<bool> {
        let mut flagged = None;
        self.update_item(collection, item, |target| {
            target.is_favorite = !target.is_favorite;
            flagged = Some(target.is_favorite);
        });
        flagged
    }

    pub fn set_trending_price(&mut self, collection: usize, item: usize, price: u64) -> bool {
        self.update_item(collection, item, |target| target.trending_price = price)
    }

    fn publish(&mut self, kind: ChangeKind) {
        self.revision += 1;
        debug!("Store revision {}: {:?}", self.revision, kind);
        self.notifier.send_replace(StoreChange {
            revision: self.revision,
            kind,
        });
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for CollectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore")
            .field("collections", &self.collections.len())
            .field("revision", &self.revision)
            .finish()
    }
}
