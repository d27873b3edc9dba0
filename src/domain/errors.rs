use std::fmt;

use crate::domain::entities::ReservationStatus;

// Errors raised by the authenticated API client.
#[derive(Debug)]
pub enum ApiError {
    // Transport failure on the request itself; never retried by this layer.
    Network(reqwest::Error),
    // Response body could not be parsed into the expected shape.
    Decode(reqwest::Error),
    // Refresh exchange failed or no refresh token was present. Terminal:
    // local credentials are already cleared when this surfaces.
    SessionExpired,
    // Non-success status from the backend, with its error message when one
    // could be read from the body.
    Status { status: u16, message: Option<String> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(err) => write!(f, "network error: {err}"),
            ApiError::Decode(err) => write!(f, "response decode error: {err}"),
            ApiError::SessionExpired => write!(f, "session expired; sign in again"),
            ApiError::Status { status, message } => {
                if let Some(message) = message {
                    write!(f, "backend error {status}: {message}")
                } else {
                    write!(f, "backend error {status}")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

// Errors raised by the reservation workflow use cases.
#[derive(Debug)]
pub enum ReservationError {
    // Attempted transition that is not part of the legal approval sequence
    // for the reservation's current state.
    StateConflict { current: ReservationStatus },
    // A required field is missing or malformed; the reservation is untouched.
    Validation { message: String },
    // The actor is not allowed to perform this action on the reservation.
    Forbidden,
    // Persisting the transition through the API client failed.
    Api(ApiError),
}

impl ReservationError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationError::StateConflict { current } => {
                write!(f, "no transition allowed from status {}", current.as_str())
            }
            ReservationError::Validation { message } => write!(f, "validation failed: {message}"),
            ReservationError::Forbidden => write!(f, "actor is not allowed to perform this action"),
            ReservationError::Api(err) => write!(f, "persistence failed: {err}"),
        }
    }
}

impl std::error::Error for ReservationError {}

impl From<ApiError> for ReservationError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
