//! Curated list of external shops where collectors can price items.

use crate::core::{CatalogError, Result};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLink {
    pub name: String,
    pub link: Url,
}

const DEFAULT_STORES: [(&str, &str); 5] = [
    ("Amazon", "https://www.amazon.com"),
    ("eBay", "https://www.ebay.com"),
    ("Walmart", "https://www.walmart.com"),
    ("Best Buy", "https://www.bestbuy.com"),
    ("Target", "https://www.target.com"),
];

/// Ordered list of shop links. Entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreDirectory {
    stores: Vec<StoreLink>,
}

impl StoreDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let stores = DEFAULT_STORES
            .iter()
            .filter_map(|(name, link)| {
                Url::parse(link).ok().map(|link| StoreLink {
                    name: (*name).to_string(),
                    link,
                })
            })
            .collect();
        Self { stores }
    }

    pub fn stores(&self) -> &[StoreLink] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Add a shop. The name must be non-blank and the link an absolute URL.
    pub fn add(&mut self, name: &str, link: &str) -> Result<&StoreLink> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidLink("store name is empty".to_string()));
        }
        let link = Url::parse(link.trim())
            .map_err(|e| CatalogError::InvalidLink(format!("'{}': {}", link, e)))?;

        log::debug!("Adding store '{}' -> {}", name, link);
        self.stores.push(StoreLink {
            name: name.to_string(),
            link,
        });
        Ok(&self.stores[self.stores.len() - 1])
    }
}
