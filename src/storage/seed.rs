//! Seed document loading.
//!
//! The seed is a JSON array of collections with nested items. Any failure
//! to read or parse it is returned to the caller, which must not start with
//! a partially loaded store.

use crate::core::{CatalogError, Collection, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{Level, event, info_span};

#[derive(Debug, Clone)]
pub struct SeedLoader {
    path: PathBuf,
    strict_ids: bool,
    required: bool,
}

impl SeedLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            strict_ids: false,
            required: true,
        }
    }

    /// Reject duplicate collection or item ids.
    pub fn strict_ids(mut self, strict: bool) -> Self {
        self.strict_ids = strict;
        self
    }

    /// When `false`, a missing file yields an empty seed.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Collection>> {
        let span = info_span!("seed_load", path = %self.path.display());
        let _guard = span.enter();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if self.required {
                    return Err(CatalogError::SeedNotFound(self.path.clone()));
                }
                log::warn!("Seed file {} missing, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(CatalogError::SeedIo {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let collections = parse_seed_reader(BufReader::new(file))?;
        if self.strict_ids {
            check_unique_ids(&collections)?;
        }

        event!(
            Level::INFO,
            collections = collections.len(),
            items = collections.iter().map(Collection::item_count).sum::<usize>(),
            "seed loaded"
        );
        Ok(collections)
    }
}

pub fn parse_seed(json: &str) -> Result<Vec<Collection>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_seed_reader<R: Read>(reader: R) -> Result<Vec<Collection>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Collection ids must be unique in the list, item ids across all collections.
pub fn check_unique_ids(collections: &[Collection]) -> Result<()> {
    let mut collection_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for collection in collections {
        if !collection_ids.insert(collection.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                kind: "collection",
                id: collection.id.clone(),
            });
        }
        for item in &collection.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "item",
                    id: item.id.clone(),
                });
            }
        }
    }
    Ok(())
}
