pub mod account_item;
pub mod button;
pub mod icons;
pub mod popper;
pub mod search_box;

pub use account_item::AccountItem;
pub use button::{Button, ButtonVariant};
pub use popper::PopperWrapper;
pub use search_box::SearchBox;
