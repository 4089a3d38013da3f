use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("in-memory storage lock was poisoned")]
    Poisoned,
}

/// Why a saved board was thrown away in favour of a fresh one.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("saved board is not valid JSON for this schema")]
    Malformed(#[from] serde_json::Error),
    #[error("saved board has version {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("saved board is inconsistent: {0}")]
    Invalid(&'static str),
}
