//! Core data types shared between the foreground path and refresh jobs.
//!
//! This module defines the records exchanged through the cache directory: the
//! folder listing entries, the pid records tracking in-flight refresh jobs and
//! the last-error record a failed job leaves behind.
//!
//! # Public API
//! - [`FolderRecord`]: A named folder backed by a saved-search file
//! - [`RefreshJobRecord`]: Pid + start time of an in-flight refresh job
//! - [`RefreshError`]: Last error raised by a refresh job, surfaced once

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A smart folder as produced by the root listing. The display name is the
/// file stem of the saved-search path; the path is the natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRecord {
    pub name: String,
    pub path: String,
}

impl FolderRecord {
    /// Derive a record from a saved-search path, taking the file stem as name
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = Path::new(&path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        FolderRecord { name, path }
    }
}

/// Pid record written next to a cache artifact while its refresh job runs.
/// The record alone does not mean RUNNING; the pid must also probe alive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshJobRecord {
    pub pid: u32,
    pub started_at: DateTime<Utc>,
}

impl RefreshJobRecord {
    pub fn new(pid: u32) -> Self {
        RefreshJobRecord {
            pid,
            started_at: Utc::now(),
        }
    }
}

/// Surfacing state of a [`RefreshError`] warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningStatus {
    /// Not yet shown to the user
    New,
    /// Already surfaced once; kept until the next successful refresh
    Seen,
}

/// Last error raised by a refresh job, stored under the reserved cache key.
/// The prior payload for the failing key is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshError {
    pub status: WarningStatus,
    pub key: String,
    pub occurred_at: DateTime<Utc>,
    pub message: String,
}

impl RefreshError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        RefreshError {
            status: WarningStatus::New,
            key: key.into(),
            occurred_at: Utc::now(),
            message: message.into(),
        }
    }
}
