use thiserror::Error;

/// Why a product candidate was rejected.
///
/// Checks run in a fixed order (name length, then quantity, then
/// uniqueness) and the first failure is the one reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Product name must have at least 2 characters")]
    NameTooShort,

    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    #[error("A product named \"{0}\" already exists")]
    DuplicateName(String),
}

/// Failures talking to the storage backend.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum StockError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StockError {
    /// Returns the validation failure, if that is what this error is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            StockError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
