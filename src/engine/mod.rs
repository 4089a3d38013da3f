pub mod error;
pub mod gesture;
pub mod protocol;
pub mod store;
