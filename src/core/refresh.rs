//! Background refresh coordination: job registry and staleness-driven launch.
//!
//! Refresh jobs are detached OS processes re-invoking this binary's
//! `refresh` subcommand. The registry tracks at most one in-flight job per
//! cache key through a pid record next to the key's artifact; RUNNING is
//! decided by probing the recorded pid, never by the record's existence
//! alone, so a crashed job can never wedge a key.
//!
//! # Public API
//! - [`JobRegistry`]: per-key IDLE/RUNNING state backed by pid records
//! - [`JobSpec`]: the command a refresh job runs
//! - [`RefreshCoordinator`]: staleness check + at-most-one launch + re-poll flag
//! - [`RefreshOutcome`]: what `ensure_refreshing` observed
//!
//! # Invariants
//! - At most one job per key is RUNNING at any time; a second caller only
//!   observes the in-flight job.
//! - The foreground path never waits on a job; it serves whatever is cached
//!   and reports "poll again soon".
//! - An unreadable or dead pid record reads as IDLE (erring toward
//!   relaunching, never toward deadlock) and is removed on probe.

use crate::core::cache::CacheStore;
use crate::core::error::{FolderNavigatorError, Result};
use crate::core::freshness::is_fresh;
use crate::core::state::RefreshJobRecord;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

/// Result of an `ensure_refreshing` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub already_running: bool,
    pub started: bool,
}

/// The command a refresh job executes, detached from the foreground
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl JobSpec {
    /// Job refreshing the root folder listing by re-invoking this binary
    pub fn refresh_folders() -> Result<Self> {
        Ok(JobSpec {
            program: std::env::current_exe()?,
            args: vec!["refresh".to_string()],
        })
    }

    /// Job refreshing the contents of the folder at `path`
    pub fn refresh_folder(path: &str) -> Result<Self> {
        Ok(JobSpec {
            program: std::env::current_exe()?,
            args: vec![
                "refresh".to_string(),
                "--folder".to_string(),
                path.to_string(),
            ],
        })
    }
}

/// Probe whether `pid` is alive without signalling it.
fn pid_is_alive(pid: u32) -> bool {
    Command::new("kill")
        .args(["-0", &pid.to_string()])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Per-key refresh job tracking backed by pid records in the cache root
pub struct JobRegistry {
    root: PathBuf,
}

impl JobRegistry {
    pub fn new(root: PathBuf) -> Self {
        JobRegistry { root }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.pid"))
    }

    /// Whether a refresh job for `key` is currently RUNNING.
    ///
    /// A record whose pid no longer probes alive transitions the key back to
    /// IDLE and is removed, so crashed jobs never leave a key stuck.
    pub fn is_running(&self, key: &str) -> bool {
        let path = self.record_path(key);
        let record = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return false,
        };

        let record: RefreshJobRecord = match serde_json::from_str(&record) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("discarding malformed pid record for '{key}': {e}");
                let _ = std::fs::remove_file(&path);
                return false;
            }
        };

        if pid_is_alive(record.pid) {
            log::debug!(
                "refresh job for '{key}' running as pid {} since {}",
                record.pid,
                record.started_at
            );
            true
        } else {
            log::debug!("refresh job for '{key}' (pid {}) is gone", record.pid);
            let _ = std::fs::remove_file(&path);
            false
        }
    }

    /// Record the pid of a freshly launched job for `key`.
    pub fn mark_running(&self, key: &str, pid: u32) -> Result<()> {
        let record = RefreshJobRecord::new(pid);
        let json = serde_json::to_string(&record)?;
        std::fs::write(self.record_path(key), json)?;
        Ok(())
    }
}

/// Decides whether to (re)issue a refresh job and surfaces the re-poll flag
pub struct RefreshCoordinator {
    registry: JobRegistry,
}

impl RefreshCoordinator {
    pub fn new(root: &Path) -> Self {
        RefreshCoordinator {
            registry: JobRegistry::new(root.to_path_buf()),
        }
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Make sure a refresh job for `key` is in flight, launching `spec`
    /// detached if none is. Never waits for the job.
    pub fn ensure_refreshing(&self, key: &str, spec: &JobSpec) -> Result<RefreshOutcome> {
        if self.registry.is_running(key) {
            return Ok(RefreshOutcome {
                already_running: true,
                started: false,
            });
        }

        let child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| FolderNavigatorError::job_spawn_failed(key, e))?;

        let pid = child.id();
        log::debug!("launched refresh job for '{key}' as pid {pid}");
        self.registry.mark_running(key, pid)?;

        Ok(RefreshOutcome {
            already_running: false,
            started: true,
        })
    }

    /// Ensure fresh-enough data for `key` is on its way.
    ///
    /// Returns the re-poll flag: `true` when the caller should ask again
    /// shortly because a refresh is (now) in flight, `false` when the cached
    /// artifact is fresh. The caller always serves the currently cached
    /// payload either way.
    pub fn refresh_if_stale(
        &self,
        cache: &CacheStore,
        key: &str,
        max_age: Duration,
        spec: &JobSpec,
    ) -> Result<bool> {
        let entry = cache.get(key)?;
        if let Some(entry) = &entry {
            if is_fresh(entry.last_written, max_age) {
                return Ok(false);
            }
        }

        let outcome = self.ensure_refreshing(key, spec)?;
        if outcome.already_running {
            log::debug!("'{key}' stale; refresh already in flight");
        }
        Ok(true)
    }
}
