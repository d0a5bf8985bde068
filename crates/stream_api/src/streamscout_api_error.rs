//! Helper utilities for returning API errors to clients.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Represents an error to send back to clients (e.g. Stremio).
#[derive(Debug, Serialize)]
pub struct StreamApiError {
    pub status: u16,
    pub message: String,
}

impl ResponseError for StreamApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl StreamApiError {
    /// Create a new instance of [StreamApiError] with a given [StatusCode].
    /// Before creating a new [StreamApiError], check for dedicated methods
    /// to return the appropriate status code.
    pub fn new(message: &str, status: StatusCode) -> Self {
        StreamApiError {
            message: String::from(message),
            status: status.as_u16(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn internal_server_error() -> Self {
        Self::new("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Display for StreamApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string(self)
                .unwrap_or_else(|_| String::from("{ message: \"Fatal Error\" }"))
        )
    }
}
