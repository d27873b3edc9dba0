use serde::{Deserialize, Serialize};

use crate::domain::entities::UserProfile;

// Request payload for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// Response payload for login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

// Request payload for the refresh exchange.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

// Response payload for the refresh exchange. The refresh token may or may
// not rotate; when absent the old one stays valid.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

// Request payload for logout (refresh-token blacklisting).
#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub refresh: &'a str,
}

// Error envelope used by the backend. Older endpoints use `message`, the
// DRF-style ones use `detail`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.detail)
    }
}
