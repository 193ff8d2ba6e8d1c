pub mod default_layout;
pub mod header;
pub mod header_only;
pub mod sidebar;

pub use default_layout::DefaultLayout;
pub use header::Header;
pub use header_only::HeaderOnly;
pub use sidebar::Sidebar;
