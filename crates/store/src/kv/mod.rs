pub mod fs;
pub mod in_memory;
mod r#trait;

pub use fs::FsKvStore;
pub use in_memory::InMemoryKvStore;
pub use r#trait::{KeyValueStore, KvError};
