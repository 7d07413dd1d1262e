use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The mandatory record collection could not be obtained.
    #[error("Catalog unavailable at {}: {reason}", path.display())]
    CatalogUnavailable { path: PathBuf, reason: String },

    /// The optional nutrition notes could not be obtained.
    #[error("Nutrition notes unavailable: {0}")]
    NotesUnavailable(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid filter criteria: {0}")]
    InvalidCriteria(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
