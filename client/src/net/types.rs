//! Wire DTOs and errors for the clinic REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's camelCase JSON so serde stays lossless. The
//! identity record itself lives in `state::session`, since it is also the
//! persisted session payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::SessionUser;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: SessionUser,
    pub token: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub lastname: String,
    /// Sent as an empty string when the user leaves it blank.
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message, if the API sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}
