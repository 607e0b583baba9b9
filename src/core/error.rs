//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`FolderNavigatorError`] which provides comprehensive error
//! handling for all folder-navigator operations. It uses `thiserror` for ergonomic
//! error definitions and includes specialized error constructors for common failure
//! scenarios.
//!
//! # Public API
//! - [`FolderNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, FolderNavigatorError>`
//!
//! # Error Categories
//! - **Navigation**: Unknown folder scopes resolved against the cached listing
//! - **Listing**: The external `mdfind`/`plutil` invocations failing
//! - **Cache operations**: Artifact read/write failures, missing cache root
//! - **Configuration**: Missing required environment paths, fatal at startup

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for folder-navigator
#[derive(Error, Debug)]
pub enum FolderNavigatorError {
    // Navigation errors
    #[error("Unknown folder: {name}")]
    UnknownScope { name: String },

    // Listing errors
    #[error("Listing command failed: {message}")]
    ListingFailed { message: String },

    #[error("Could not launch '{program}': {source}")]
    ListingSpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("Could not parse saved search '{path}': {message}")]
    SavedSearchParseFailed { path: PathBuf, message: String },

    // Cache errors
    #[error("Cache directory does not exist: {path}")]
    CacheRootMissing { path: PathBuf },

    #[error("Could not determine a cache directory")]
    CacheDirectoryNotFound,

    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write cache artifact '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Refresh job errors
    #[error("Failed to launch refresh job for '{key}': {source}")]
    JobSpawnFailed { key: String, source: std::io::Error },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using FolderNavigatorError
pub type Result<T> = std::result::Result<T, FolderNavigatorError>;

impl FolderNavigatorError {
    /// Create an unknown scope error for a folder name that did not resolve
    pub fn unknown_scope(name: impl Into<String>) -> Self {
        Self::UnknownScope { name: name.into() }
    }

    /// Create a listing failed error from the failing command's stderr
    pub fn listing_failed(message: impl Into<String>) -> Self {
        Self::ListingFailed {
            message: message.into(),
        }
    }

    /// Create a listing spawn failed error
    pub fn listing_spawn_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::ListingSpawnFailed {
            program: program.into(),
            source,
        }
    }

    /// Create a saved search parse error
    pub fn saved_search_parse_failed(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::SavedSearchParseFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a cache root missing error
    pub fn cache_root_missing(path: impl Into<PathBuf>) -> Self {
        Self::CacheRootMissing { path: path.into() }
    }

    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a job spawn failed error
    pub fn job_spawn_failed(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::JobSpawnFailed {
            key: key.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error should abort the invocation before any cache work
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::CacheRootMissing { .. }
        )
    }
}
