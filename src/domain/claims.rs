use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

// The only claim this client reads. Tokens are opaque otherwise; signature
// verification is the backend's job.
#[derive(Deserialize)]
struct Claims {
    exp: u64,
}

// Extract the expiry claim (epoch seconds) from a JWT access token.
pub fn expiry_claim(token: &str) -> Option<u64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}

// A token whose expiry has passed must not be sent without refreshing first.
// Tokens that cannot be decoded count as expired.
pub fn is_expired(token: &str, now_epoch_seconds: u64) -> bool {
    match expiry_claim(token) {
        Some(exp) => exp <= now_epoch_seconds,
        None => true,
    }
}
