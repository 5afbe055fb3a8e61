pub mod offsets;
pub mod seed;
pub mod store;

pub use seed::{SeedLoader, check_unique_ids, parse_seed};
pub use store::{ChangeKind, CollectionStore, StoreChange};
