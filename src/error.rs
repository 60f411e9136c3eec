use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("generation service error: {0}")]
    Upstream(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid release form: {0}")]
    InvalidForm(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
