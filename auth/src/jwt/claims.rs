use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity assertion carried inside a signed token.
///
/// Only the three RFC 7519 registered claims needed to assert an identity
/// for a bounded time window are present; all of them are mandatory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (login the token was issued to)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, valid from `now` for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    /// * `now` - Issue instant
    /// * `ttl` - Validity window
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_subject(subject: impl ToString, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
