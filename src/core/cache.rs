//! File-backed cache store for listing artifacts.
//!
//! One artifact per cache key under the cache root, written atomically by
//! refresh jobs and read by any number of concurrent foreground invocations.
//! Artifacts are plain newline-delimited path lists so they stay debuggable
//! with nothing but `cat`.
//!
//! # Public API
//! - [`CacheStore`]: get/put over keyed artifacts plus the error record
//! - [`CacheEntry`]: payload lines + the artifact's last write time
//! - [`contents_key`]: stable key derivation for a folder's contents
//!
//! # Cache Strategy
//! - **Atomic replace**: writes go to a temp file in the same directory and
//!   are renamed over the artifact, so readers never observe a torn value
//! - **Absence is a state**: a missing or unreadable artifact reads as
//!   `None` (cold cache), never as an empty payload
//! - **Last-good-value**: a failed refresh records an error and leaves the
//!   previous artifact in place

use crate::core::error::{FolderNavigatorError, Result};
use crate::core::state::{RefreshError, WarningStatus};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

/// Well-known key for the root folder listing
pub const FOLDERS_KEY: &str = "folders";

/// Reserved key for the last refresh error
pub const ERROR_KEY: &str = "last-error";

/// Cache key for the contents of the folder at `path`.
///
/// The derivation is deterministic: the same path always maps to the same
/// artifact, and distinct paths practically never collide.
pub fn contents_key(path: &str) -> String {
    format!("folder-contents-{:x}", md5::compute(path.as_bytes()))
}

/// A successfully read cache artifact
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub lines: Vec<String>,
    pub last_written: SystemTime,
}

/// Keyed artifact storage rooted at the cache directory
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: PathBuf) -> Self {
        CacheStore { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.txt"))
    }

    /// Read the artifact for `key`.
    ///
    /// Returns `Ok(None)` for a cold cache. A corrupt or unreadable artifact
    /// also reads as `None` (with a warning) rather than yielding truncated
    /// data; the next refresh will replace it.
    pub fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let path = self.artifact_path(key);
        if !path.exists() {
            log::debug!("cache miss for '{key}'");
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("unreadable cache artifact '{}': {e}", path.display());
                return Ok(None);
            }
        };
        let last_written = match std::fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(mtime) => mtime,
            Err(e) => {
                log::warn!("no mtime for cache artifact '{}': {e}", path.display());
                return Ok(None);
            }
        };

        let lines = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();
        log::debug!("cache hit for '{key}': {} line(s)", lines.len());
        Ok(Some(CacheEntry {
            lines,
            last_written,
        }))
    }

    /// Atomically replace the artifact for `key` with `lines`.
    ///
    /// The payload is fully visible to subsequent reads or the store is left
    /// unchanged; there is no observable partial write.
    pub fn put(&self, key: &str, lines: &[String]) -> Result<()> {
        let path = self.artifact_path(key);
        let mut tmp = NamedTempFile::new_in(&self.root)
            .map_err(|e| FolderNavigatorError::cache_write_failed(&path, e))?;

        for line in lines {
            writeln!(tmp, "{line}").map_err(|e| FolderNavigatorError::cache_write_failed(&path, e))?;
        }
        tmp.flush()
            .map_err(|e| FolderNavigatorError::cache_write_failed(&path, e))?;

        tmp.persist(&path)
            .map_err(|e| FolderNavigatorError::cache_write_failed(&path, e.error))?;

        log::debug!("wrote {} line(s) to cache artifact '{key}'", lines.len());
        Ok(())
    }

    /// Record a refresh failure under the reserved error key. The failing
    /// key's own artifact is not touched.
    pub fn record_error(&self, error: &RefreshError) -> Result<()> {
        let mut lines = vec![
            "new".to_string(),
            error.key.clone(),
            error.occurred_at.to_rfc3339(),
        ];
        lines.extend(error.message.lines().map(String::from));
        self.put(ERROR_KEY, &lines)
    }

    /// Surface the pending refresh error, if one exists and has not been
    /// shown yet. The record is re-marked as seen so the warning appears
    /// exactly once; only a successful refresh removes it.
    pub fn take_warning(&self) -> Result<Option<RefreshError>> {
        let Some(error) = self.read_error()? else {
            return Ok(None);
        };
        if error.status == WarningStatus::Seen {
            return Ok(None);
        }

        let mut lines = vec![
            "seen".to_string(),
            error.key.clone(),
            error.occurred_at.to_rfc3339(),
        ];
        lines.extend(error.message.lines().map(String::from));
        self.put(ERROR_KEY, &lines)?;

        Ok(Some(error))
    }

    /// Remove the error record after a successful refresh.
    pub fn clear_error(&self) -> Result<()> {
        let path = self.artifact_path(ERROR_KEY);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FolderNavigatorError::Io(e)),
        }
    }

    fn read_error(&self) -> Result<Option<RefreshError>> {
        let Some(entry) = self.get(ERROR_KEY)? else {
            return Ok(None);
        };
        if entry.lines.len() < 3 {
            log::warn!("malformed error record, ignoring");
            return Ok(None);
        }

        let status = match entry.lines[0].as_str() {
            "new" => WarningStatus::New,
            "seen" => WarningStatus::Seen,
            other => {
                log::warn!("unknown error record status '{other}', ignoring");
                return Ok(None);
            }
        };
        let occurred_at = DateTime::parse_from_rfc3339(&entry.lines[2])
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Ok(Some(RefreshError {
            status,
            key: entry.lines[1].clone(),
            occurred_at,
            message: entry.lines[3..].join("\n"),
        }))
    }
}
