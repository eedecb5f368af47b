//! Error types for the trainium server.
//!
//! All errors implement `IntoResponse` so handlers can propagate them with `?` and still
//! answer with a JSON `ErrorDto` body.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Main error type for the trainium server
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The requested post-authentication redirect is not a path on this application.
    #[error("Invalid redirect target: {0:?}")]
    InvalidRedirect(String),
    /// The request to the authentication provider failed or returned an unreadable body.
    #[error(transparent)]
    ProviderRequest(#[from] reqwest::Error),
    /// The authentication provider answered a session check with an unexpected status.
    #[error("Unexpected status from authentication provider: {0}")]
    ProviderStatus(u16),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For redirect targets outside this application
/// - 502 Bad Gateway - When the authentication provider fails a session check
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::InvalidRedirect(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Redirect must be a path on this site".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ProviderRequest(_) | Self::ProviderStatus(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Authentication provider unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to the client to avoid leaking details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
