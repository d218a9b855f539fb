use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> anyhow::Result<String>;
    /// Constant-time comparison against a stored PHC hash string.
    async fn verify(&self, password: &str, password_hash: &str) -> anyhow::Result<bool>;
    /// A valid hash of an unguessable secret, verified against when the
    /// username is unknown so both login failures cost the same work.
    fn decoy_hash(&self) -> &str;
}
