use users_core::CoreError;
use users_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";
pub const NO_USER_WITH_SUCH_ID: &str = "No user with such id";

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Malformed input; nothing was written
    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Referenced user does not exist; nothing was written
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        source: DbError,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn user_not_found() -> Self {
        ServiceError::NotFound {
            message: NO_USER_WITH_SUCH_ID.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidEmail { .. } => ServiceError::InvalidInput {
                message: INVALID_EMAIL_FORMAT.to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        ServiceError::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
