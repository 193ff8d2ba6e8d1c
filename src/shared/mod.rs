pub mod errors;
pub mod logging;
pub mod services;
pub mod state;
pub mod utils;

// Dioxus hooks (client + SSR)
pub mod hooks;
