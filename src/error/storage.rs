use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    IO(String),
    Serialization(String),
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IO(msg) => write!(f, "I/O Error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization Error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error.to_string())
    }
}
