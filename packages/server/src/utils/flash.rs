//! One-shot messages carried to the next request in a signed cookie.
//!
//! The payload is a hex-encoded JSON array of strings so that it stays a
//! valid cookie value whatever the messages contain.

use axum_extra::extract::cookie::{Cookie, CookieJar, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

use crate::error::AppError;

/// Derive the cookie signing key from the configured secret.
///
/// The secret is hashed to 64 bytes first since `Key::derive_from` needs at
/// least 32 bytes of master material.
pub fn signing_key(secret: &str) -> Key {
    let master = Sha512::digest(secret.as_bytes());
    Key::derive_from(master.as_slice())
}

/// Set the messages shown on the next request, replacing any still pending.
pub fn set(
    jar: SignedCookieJar,
    cookie_name: &str,
    messages: Vec<String>,
) -> Result<SignedCookieJar, AppError> {
    let payload = hex::encode(serde_json::to_vec(&messages)?);
    let cookie = Cookie::build((cookie_name.to_string(), payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok(jar.add(cookie))
}

/// Read pending messages from `signed` and clear the cookie through `raw`.
///
/// `signed` only holds cookies whose signature verifies, so the removal goes
/// through the unsigned view of the same request. A cookie that fails
/// verification, e.g. one signed before a secret change, is cleared too.
pub fn take(
    signed: &SignedCookieJar,
    raw: CookieJar,
    cookie_name: &str,
) -> (CookieJar, Vec<String>) {
    let messages = read(signed, cookie_name);
    if raw.get(cookie_name).is_none() {
        return (raw, messages);
    }

    let raw = raw.remove(Cookie::build((cookie_name.to_string(), "")).path("/"));
    (raw, messages)
}

fn read(jar: &SignedCookieJar, cookie_name: &str) -> Vec<String> {
    let Some(cookie) = jar.get(cookie_name) else {
        return Vec::new();
    };

    let decoded = hex::decode(cookie.value())
        .map_err(|e| e.to_string())
        .and_then(|bytes| {
            serde_json::from_slice::<Vec<String>>(&bytes).map_err(|e| e.to_string())
        });

    match decoded {
        Ok(messages) => messages,
        Err(error) => {
            tracing::warn!(cookie = cookie_name, %error, "Discarding unreadable flash cookie");
            Vec::new()
        }
    }
}
