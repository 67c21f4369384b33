//! Persistence layer: the key-value abstraction, its backends, and the
//! catalog store with its degrade-and-retry policy. This is the only crate
//! permitted side effects; everything upstream passes catalog values around.

pub mod catalog_store;
pub mod kv;
pub mod seed;


pub use catalog_store::{CatalogStore, PersistenceError, CATALOG_KEY};
pub use kv::{FsKvStore, InMemoryKvStore, KeyValueStore, KvError};
