use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::TokenClaims;
use crate::domain::auth::ports::TokenIssuer;

/// HS256 token issuer backed by the shared `auth` library.
pub struct JwtTokenIssuer {
    handler: auth::JwtHandler,
}

impl JwtTokenIssuer {
    /// Create an issuer signing with `secret`; tokens live for `ttl`.
    ///
    /// # Errors
    /// * `EmptySecret` - No key material supplied
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, auth::JwtError> {
        Ok(Self {
            handler: auth::JwtHandler::new(secret, ttl)?,
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &str) -> Result<AccessToken, TokenError> {
        self.handler
            .issue(subject)
            .map(|(token, _)| AccessToken::new(token))
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = self
            .handler
            .decode(token)
            .map_err(|e| TokenError::Rejected(e.to_string()))?;

        Ok(TokenClaims {
            subject: claims.sub,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, TokenError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| TokenError::Rejected(format!("timestamp out of range: {}", seconds)))
}
