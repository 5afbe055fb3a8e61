use std::path::{Path, PathBuf};

/// Catalog startup configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path of the bundled seed document
    pub seed_path: PathBuf,

    /// Reject duplicate collection or item ids in the seed
    pub strict_ids: bool,

    /// Abort when the seed file is missing
    pub seed_required: bool,

    /// Pre-populate the store directory with the default shops
    pub default_stores: bool,
}

impl CatalogConfig {
    pub fn new<P: AsRef<Path>>(seed_path: P) -> Self {
        Self {
            seed_path: seed_path.as_ref().to_path_buf(),
            strict_ids: false,
            seed_required: true,
            default_stores: true,
        }
    }

    pub fn strict_ids(mut self, strict: bool) -> Self {
        self.strict_ids = strict;
        self
    }

    pub fn seed_required(mut self, required: bool) -> Self {
        self.seed_required = required;
        self
    }

    pub fn with_default_stores(mut self, enabled: bool) -> Self {
        self.default_stores = enabled;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("data.json")
    }
}
