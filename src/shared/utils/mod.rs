// Shared utilities
pub mod debounce;

pub use debounce::{sleep, Debouncer};
