pub mod common;
pub mod theme_resolver;
