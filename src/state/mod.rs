mod persistence;
mod store;

pub use persistence::{Draft, clear_draft, load_draft, save_draft};
pub use store::{FileStore, KeyValueStore, MemoryStore};
