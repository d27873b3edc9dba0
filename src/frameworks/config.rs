use std::{env, path::PathBuf, time::Duration};

// Runtime configuration via environment variables, with local defaults.

pub fn api_base_url() -> String {
    env::var("RESERVATION_API_URL")
        .unwrap_or_else(|_| "https://sirsakapi.teknohole.com/api".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("RESERVATION_HTTP_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}

// Where the session document lives between runs (the localStorage analogue).
pub fn session_file_path() -> PathBuf {
    env::var("RESERVATION_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".reservation_session.json"))
}
