use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("player index {index} is out of range (board has {len} players)")]
    InvalidIndex { index: usize, len: usize },
}
