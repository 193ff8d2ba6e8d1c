pub mod following;
pub mod home;
pub mod profile;
pub mod routes;
pub mod search;
pub mod upload;

pub use following::Following;
pub use home::Home;
pub use profile::Profile;
pub use search::Search;
pub use upload::Upload;
