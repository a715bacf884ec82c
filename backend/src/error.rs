//! HTTP-facing error type.
//!
//! Bodies are plain text. Store and file-system failures are logged with
//! their cause and answered with a fixed message, so nothing about the
//! database or the disk layout reaches the client.

use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("Invalid request body")]
    InvalidBody(#[from] JsonRejection),
    #[error("{0}")]
    MissingFile(&'static str),
    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),
    #[error("File exceeds the {limit} byte upload limit")]
    FileTooLarge { limit: usize },
    #[error("{message}")]
    FileWrite {
        message: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Wrap a store failure behind a fixed client-facing message.
    /// Meant for `map_err(ApiError::store("..."))`.
    pub fn store<E>(message: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        move |source| ApiError::Store {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store { .. } | ApiError::FileWrite { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(e) => e.status(),
            ApiError::MissingFile(_) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(e) => e.status(),
            ApiError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Store { message, source } => error!("{}: {:?}", message, source),
            ApiError::FileWrite { message, source } => error!("{}: {}", message, source),
            ApiError::InvalidBody(e) => warn!("Rejected JSON body: {}", e.body_text()),
            ApiError::Multipart(e) => warn!("Rejected multipart body: {}", e.body_text()),
            other => warn!("Rejected request: {}", other),
        }

        let body = match &self {
            ApiError::Multipart(e) => e.body_text(),
            other => other.to_string(),
        };
        (status, body).into_response()
    }
}
