use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
};
use async_trait::async_trait;
use password_hash::rand_core::OsRng;

use crate::application::ports::password_hasher::PasswordHasher;

/// Argon2id with default parameters. The work runs on the blocking pool so
/// concurrent logins do not stall the async workers.
pub struct Argon2PasswordHasher {
    decoy: String,
}

impl Argon2PasswordHasher {
    pub fn new() -> anyhow::Result<Self> {
        let secret = SaltString::generate(&mut OsRng);
        let decoy = hash_blocking(secret.as_str())?;
        Ok(Self { decoy })
    }
}

fn hash_blocking(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}

fn verify_blocking(password: &str, password_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> anyhow::Result<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(&password)).await?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> anyhow::Result<bool> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        tokio::task::spawn_blocking(move || verify_blocking(&password, &password_hash)).await?
    }

    fn decoy_hash(&self) -> &str {
        &self.decoy
    }
}
