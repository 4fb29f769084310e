use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<String>),
    #[error("GitHub responded with {status}")]
    CreateFailed { status: StatusCode, body: String },
    #[error("GitHub request failed")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// Raw response text attached to the failure, when the server sent one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            AppError::CreateFailed { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
