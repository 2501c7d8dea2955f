mod views;
mod routes;
#[cfg(test)]
mod tests;
pub mod configs;
pub mod contexts;
pub mod error;
pub mod fixtures;
pub mod storage;
pub mod utils;

pub use crate::routes::*;
pub use crate::views::{ Bookmark, Home, Inbox, Library, TabBar };
pub use crate::contexts::{ use_color_scheme, use_theme, ThemeContext, ThemeProvider, ThemeResolver };
pub use crate::error::StorageError;
pub use crate::storage::{ open_preference_store, PreferenceStore, SharedStore, THEME_STORAGE_KEY };
pub use crate::utils::{ ResolvedTheme, ThemeMode, ThemeSnapshot };
