//! Catalogue records.
//!
//! Field names on the wire follow the bundled seed document
//! (`trendingPrice`, `isFavorite`, `collectionName`, `imageURL`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single catalogued object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Current market price in whole currency units.
    pub trending_price: u64,
    #[serde(default)]
    pub is_favorite: bool,
    /// Name of the owning collection when the item was created.
    ///
    /// Not kept in sync when the collection is renamed later.
    pub collection_name: String,
    /// May be empty or not a valid URL; the core never dereferences it.
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// A named, ordered group of items. Owns its items exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub items: Vec<Item>,
}

/// User input for a new item, before it gets an id and an owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub trending_price: u64,
}

/// User input for a new collection, including items entered in the same form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub items: Vec<ItemDraft>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, trending_price: u64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_url: String::new(),
            trending_price,
        }
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

impl Item {
    /// Build an item from a draft. `collection_name` is copied verbatim.
    pub fn from_draft(id: String, draft: ItemDraft, collection_name: impl Into<String>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            trending_price: draft.trending_price,
            is_favorite: false,
            collection_name: collection_name.into(),
            image_url: draft.image_url,
        }
    }
}

impl Collection {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image_url: image_url.into(),
            items: Vec::new(),
        }
    }

    /// Build a collection from the add-collection form.
    ///
    /// Items entered on that form are created with an empty
    /// `collection_name`; only items added later through the store carry
    /// the owner's name. Item ids avoid each other and anything `is_taken`
    /// rejects.
    pub fn from_draft(draft: CollectionDraft, is_taken: impl Fn(&str) -> bool) -> Self {
        let mut items: Vec<Item> = Vec::with_capacity(draft.items.len());
        for item in draft.items {
            let id = generate_id(|candidate| {
                is_taken(candidate) || items.iter().any(|i| i.id == candidate)
            });
            items.push(Item::from_draft(id, item, String::new()));
        }

        Self {
            id: generate_id(|_| false),
            name: draft.name,
            description: draft.description,
            image_url: draft.image_url,
            items,
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Random v4 UUID string that `is_taken` does not reject.
pub fn generate_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !is_taken(&id) {
            return id;
        }
    }
}
