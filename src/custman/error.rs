use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Invalid {field}! Max {max} characters allowed.")]
    Validation { field: &'static str, max: usize },

    #[error("ID exists: {0}")]
    DuplicateId(i64),

    #[error("Code exists: {0}")]
    DuplicateCode(String),

    #[error("Customer list full! (capacity {0})")]
    CapacityExceeded(usize),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CustomerError>;
