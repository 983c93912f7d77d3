//! Email/password accounts backing the session gate.
//!
//! Passwords are never stored: only a PBKDF2-HMAC-SHA256 key derived with a
//! random per-account salt.

use super::now_timestamp;
use crate::models::Identity;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use rand::rngs::OsRng;
use regex::Regex;
use rusqlite::{Connection, OptionalExtension, params};
use sha2::Sha256;
use thiserror::Error;

pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 60_000;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Rejections produced by the auth service itself, after the gate's own
/// local checks passed.
#[derive(Error, Debug)]
pub enum AuthServiceError {
    #[error("The email address is badly formatted. (auth/invalid-email)")]
    InvalidEmail,

    #[error("Password should be at least 6 characters (auth/weak-password)")]
    WeakPassword,

    #[error("The email address is already in use by another account. (auth/email-already-in-use)")]
    EmailInUse,

    #[error("There is no account for this email. (auth/user-not-found)")]
    UserNotFound,

    #[error("The password is invalid. (auth/wrong-password)")]
    WrongPassword,

    #[error("Auth storage error: {0}")]
    Db(#[from] rusqlite::Error),
}

struct AccountRow {
    uid: String,
    email: String,
    salt: String,
    hash: String,
    iterations: u32,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

fn find_account(conn: &Connection, email: &str) -> rusqlite::Result<Option<AccountRow>> {
    conn.query_row(
        "SELECT uid, email, salt, hash, iterations FROM accounts WHERE email = ?1",
        [email],
        |row| {
            Ok(AccountRow {
                uid: row.get(0)?,
                email: row.get(1)?,
                salt: row.get(2)?,
                hash: row.get(3)?,
                iterations: row.get(4)?,
            })
        },
    )
    .optional()
}

pub(crate) fn create_account(
    conn: &Connection,
    email: &str,
    password: &str,
) -> Result<Identity, AuthServiceError> {
    let email = normalize_email(email);

    if !is_valid_email(&email) {
        return Err(AuthServiceError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthServiceError::WeakPassword);
    }
    if find_account(conn, &email)?.is_some() {
        return Err(AuthServiceError::EmailInUse);
    }

    let mut salt = [0u8; 16];
    OsRng.fill_bytes(&mut salt);
    let key = derive_key(password, &salt, DEFAULT_PBKDF2_ITERATIONS);

    let identity = Identity {
        uid: uuid::Uuid::new_v4().to_string(),
        email,
    };

    conn.execute(
        "INSERT INTO accounts (uid, email, salt, hash, iterations, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            identity.uid,
            identity.email,
            B64.encode(salt),
            B64.encode(key),
            DEFAULT_PBKDF2_ITERATIONS,
            now_timestamp(),
        ],
    )?;

    Ok(identity)
}

pub(crate) fn verify_account(
    conn: &Connection,
    email: &str,
    password: &str,
) -> Result<Identity, AuthServiceError> {
    let email = normalize_email(email);
    let account = find_account(conn, &email)?.ok_or(AuthServiceError::UserNotFound)?;

    let salt = B64
        .decode(account.salt.as_bytes())
        .map_err(|_| AuthServiceError::WrongPassword)?;
    let key = derive_key(password, &salt, account.iterations.max(1));

    if B64.encode(key) != account.hash {
        return Err(AuthServiceError::WrongPassword);
    }

    Ok(Identity {
        uid: account.uid,
        email: account.email,
    })
}
