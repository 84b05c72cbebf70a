//! Unified application error type.
//! All modules (db, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Note: user-correctable validation problems are NOT AppError variants.
//! They are collected into a `core::validate::ValidationReport` and surfaced
//! as a save outcome, so a bad form submission never aborts the process.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Domain lookups
    // ---------------------------
    #[error("No holder found with id {0}")]
    HolderNotFound(i64),

    #[error("Unknown survey section: {0}")]
    UnknownSection(u32),

    // ---------------------------
    // Payload / input errors
    // ---------------------------
    #[error("Invalid section payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
