use crate::config::CatalogConfig;
use crate::core::{Collection, CollectionDraft, Result};
use crate::directory::StoreDirectory;
use crate::query::{self, CatalogSummary, FavoriteEntry};
use crate::storage::{CollectionStore, SeedLoader};
use log::info;

/// Everything a front end needs for one session.
///
/// Built once at startup and passed to whatever composes the screens;
/// there is no process-wide instance.
#[derive(Debug)]
pub struct Catalog {
    store: CollectionStore,
    directory: StoreDirectory,
}

impl Catalog {
    /// Load the seed described by `config` and build the session state.
    ///
    /// Fails if the seed cannot be read or parsed; callers should treat
    /// that as fatal.
    pub fn open(config: &CatalogConfig) -> Result<Self> {
        let loader = SeedLoader::new(&config.seed_path)
            .strict_ids(config.strict_ids)
            .required(config.seed_required);
        let seed = loader.load()?;

        info!(
            "Catalog opened from {} with {} collections",
            loader.path().display(),
            seed.len()
        );
        Ok(Self::from_parts(seed, config.default_stores))
    }

    /// Session state from in-memory seed data.
    pub fn from_collections(seed: Vec<Collection>) -> Self {
        Self::from_parts(seed, true)
    }

    fn from_parts(seed: Vec<Collection>, default_stores: bool) -> Self {
        let directory = if default_stores {
            StoreDirectory::with_defaults()
        } else {
            StoreDirectory::empty()
        };
        Self {
            store: CollectionStore::new(seed),
            directory,
        }
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CollectionStore {
        &mut self.store
    }

    pub fn directory(&self) -> &StoreDirectory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut StoreDirectory {
        &mut self.directory
    }

    /// Save the add-collection form. Returns the new collection's index.
    ///
    /// Item ids are unique across the whole store.
    pub fn add_collection(&mut self, draft: CollectionDraft) -> usize {
        let store = &self.store;
        let collection = Collection::from_draft(draft, |id| store.find_item(id).is_some());
        self.store.append(collection);
        self.store.len() - 1
    }

    pub fn favorites(&self) -> Vec<FavoriteEntry<'_>> {
        query::favorite_items(self.store.collections())
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::from_collections(self.store.collections())
    }
}
