pub mod env_validate;

pub use env_validate::get_storage_path;
