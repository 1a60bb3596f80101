//! Password hashing helpers and admin bootstrap
//!
//! Credentials are verified against the `users` table; password hashes use
//! argon2 with a per-hash random salt. There is no server-side session
//! state: the login endpoint returns the user record and the browser keeps
//! it in local storage.

use crate::{Error, Result};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use sqlx::SqlitePool;
use tracing::info;

/// Bootstrap admin credentials, created on first run if missing
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_DEFAULT_PASSWORD: &str = "admin123";

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored argon2 hash
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Create the admin user if it does not exist yet
///
/// Runs at startup and from the manual init endpoint; safe to call
/// repeatedly.
pub async fn ensure_admin_user(pool: &SqlitePool) -> Result<()> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
            .bind(ADMIN_USERNAME)
            .fetch_optional(pool)
            .await?;

    if existing.is_none() {
        let password_hash = hash_password(ADMIN_DEFAULT_PASSWORD)?;
        sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, datetime('now'))",
        )
        .bind(ADMIN_USERNAME)
        .bind(password_hash)
        .execute(pool)
        .await?;
        info!("Admin user created");
    }

    Ok(())
}
