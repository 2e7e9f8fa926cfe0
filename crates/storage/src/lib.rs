#![forbid(unsafe_code)]

pub mod files;
pub mod repository;
pub mod selection;
pub mod store;

pub use files::FileBackend;
pub use repository::{InMemoryBackend, StorageError, WordBackend};
pub use selection::EmptyListError;
pub use store::{SessionWords, StoreError, WordSetStore, filter_pairs};
