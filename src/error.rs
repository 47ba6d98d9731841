//! Error types for graphdev operations.
//!
//! This module defines [`GraphdevError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GraphdevError` for domain-specific errors that callers branch on
//! - Use `anyhow::Error` (via `GraphdevError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for graphdev operations.
#[derive(Debug, Error)]
pub enum GraphdevError {
    /// Minimum-version string is not a MAJOR.MINOR pair.
    #[error("Invalid version format '{value}': expected MAJOR.MINOR (e.g. 3.10)")]
    InvalidVersionFormat { value: String },

    /// Package name fails the identifier pattern.
    #[error("Invalid package name '{name}'. Use letters, numbers, and underscores only.")]
    InvalidPackageName { name: String },

    /// Scaffold destination already exists and --force was not given.
    #[error("File exists: {path}")]
    FileAlreadyExists { path: PathBuf },

    /// No Python interpreter could be located.
    #[error("No Python interpreter found (tried python3, python on PATH)")]
    InterpreterNotFound,

    /// The interpreter ran but produced output we could not use.
    #[error("Interpreter query failed: {message}")]
    InterpreterQueryFailed { message: String },

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for graphdev operations.
pub type Result<T> = std::result::Result<T, GraphdevError>;
