// UI state machines, kept free of Dioxus so they can be unit tested natively
pub mod search_box;

pub use search_box::{debounce_then_search, SearchBoxState, SearchStateHandle, SearchTicket};
