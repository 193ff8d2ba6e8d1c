// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod account;
pub mod search;

pub use account::AccountRecord;
pub use search::*;
