pub mod backend;
pub mod codec;
pub mod error;
pub mod worker;

pub use backend::{FileStorage, KeyValueStorage, MemoryStorage};
pub use codec::{clear, decode, encode, hydrate, STORAGE_KEY};
pub use error::{LoadError, StorageError};
pub use worker::PersistWorker;
