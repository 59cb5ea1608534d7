use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to load catalog '{name}': {reason}")]
    CatalogLoad { name: String, reason: String },

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AuditError>;
