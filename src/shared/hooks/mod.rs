// Custom Dioxus hooks
pub mod use_search_box;

pub use use_search_box::{use_search_box, UseSearchBoxReturn};
