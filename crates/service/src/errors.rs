use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl ServiceError {
    pub fn car_not_found() -> Self { Self::NotFound("Car not found".into()) }

    pub fn invalid(msg: impl Into<String>) -> Self { Self::InvalidInput(msg.into()) }

    pub fn storage(err: impl std::fmt::Display) -> Self { Self::StorageUnavailable(err.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::InvalidInput(_) => 1001,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Conflict(_) => 1004,
            ServiceError::StorageUnavailable(_) => 1200,
        }
    }
}
