//! Unified application error type.
//! All modules (store, auth, core, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("No record found with id '{0}'")]
    NotFound(String),

    #[error("Subscription error: {0}")]
    Subscription(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(
        "A work entry for {0} already exists! Please edit the existing entry instead."
    )]
    DuplicateDate(String),

    #[error("Id prefix '{0}' matches more than one record")]
    AmbiguousId(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Login Failed")]
    LoginFailed,

    #[error("Failed to create an account: {0}")]
    SignUpFailed(String),

    #[error("Not signed in. Run `dailywork login <email> --password <password>` first.")]
    NotSignedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Form-level failures caught before any store call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::MissingField(_)
                | AppError::DuplicateDate(_)
                | AppError::AmbiguousId(_)
                | AppError::PasswordMismatch
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
