pub mod error;
pub mod model;
pub mod price;

pub use error::{CatalogError, Result};
pub use model::{Collection, CollectionDraft, Item, ItemDraft};
pub use price::PriceField;
