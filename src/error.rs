use http::StatusCode;
use thiserror::Error;

/// Message returned to callers for every server-side failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Internal Server Error";

#[derive(Error, Debug, Clone)]
pub enum LogQueryError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Log store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Log store rejected request with status {status}: {body}")]
    StoreRejected { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LogQueryError>;

impl From<serde_json::Error> for LogQueryError {
    fn from(e: serde_json::Error) -> Self {
        LogQueryError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for LogQueryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LogQueryError::Json(e.to_string())
        } else {
            LogQueryError::StoreUnavailable(e.to_string())
        }
    }
}

impl LogQueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LogQueryError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            LogQueryError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LogQueryError::StoreRejected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            // Undecodable collaborator replies are server-side failures too.
            LogQueryError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LogQueryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to hand back to the caller. Only client mistakes are echoed.
    pub fn public_message(&self) -> String {
        match self {
            LogQueryError::InvalidFilter(_) => self.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

// Axum IntoResponse implementation (feature-gated)
#[cfg(feature = "axum-support")]
use axum::response::{IntoResponse, Json, Response};
#[cfg(feature = "axum-support")]
use serde::Serialize;

/// Body shape shared by every error and confirmation response.
#[cfg(feature = "axum-support")]
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(feature = "axum-support")]
impl IntoResponse for LogQueryError {
    fn into_response(self) -> Response {
        let body = MessageResponse {
            message: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
