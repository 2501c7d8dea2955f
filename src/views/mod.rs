mod bookmark;
mod home;
mod inbox;
mod library;
mod tab_bar;

pub use bookmark::Bookmark;
pub use home::Home;
pub use inbox::Inbox;
pub use library::Library;
pub use tab_bar::TabBar;
