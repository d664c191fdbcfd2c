use std::process::ExitCode;

use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::images::ImageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            AppError::Internal(_) => 1,
            AppError::Validation(_) => 2,
            AppError::NotFound => 3,
            AppError::Conflict(_) => 4,
            AppError::Unauthorized(_) => 5,
            AppError::Forbidden(_) => 6,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidInput(msg) => AppError::Validation(msg),
            e @ (DomainError::DuplicateArticle(_) | DomainError::ProductInUse(_)) => {
                AppError::Conflict(e.to_string())
            }
            e @ DomainError::InvalidCredentials => AppError::Unauthorized(e.to_string()),
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ImageError> for AppError {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::Io(_) => AppError::Internal(e.to_string()),
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}
