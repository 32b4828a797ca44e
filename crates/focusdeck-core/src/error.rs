//! Core error types for focusdeck-core.
//!
//! This module defines the error hierarchy using thiserror. The engine itself
//! can only fail on caller-input validation; everything else here belongs to
//! the storage adapters.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Snapshot persistence errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Title was empty or whitespace-only
    #[error("Task title must not be empty")]
    EmptyTitle,
}

/// Snapshot-specific errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Failed to read the snapshot file
    #[error("Failed to read snapshot from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Failed to write the snapshot file
    #[error("Failed to write snapshot to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// Snapshot was produced by a newer build
    #[error("Unsupported snapshot version {found} (this build reads up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot contents failed to parse
    #[error("Failed to parse snapshot: {0}")]
    ParseFailed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
