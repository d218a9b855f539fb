use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is invalid")]
    Invalid,
    #[error("token has expired")]
    Expired,
}

/// Stateless bearer tokens. Nothing is stored server side, so an issued
/// token stays valid until it expires.
pub trait TokenService: Send + Sync {
    fn issue_at(
        &self,
        user_id: Uuid,
        username: &str,
        now: DateTime<Utc>,
    ) -> anyhow::Result<IssuedToken>;

    /// Signature is checked before expiry.
    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError>;

    fn issue(&self, user_id: Uuid, username: &str) -> anyhow::Result<IssuedToken> {
        self.issue_at(user_id, username, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }
}
