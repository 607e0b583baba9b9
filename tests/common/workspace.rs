//! Isolated workspace setup for integration tests
//!
//! Each test gets its own cache root, fake home directory and stub listing
//! commands, wired into the binary through the environment override hooks.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Workspace holding every directory an invocation touches. The TempDir must
/// be kept alive for the duration of the test to prevent cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub cache_dir: PathBuf,
    pub home_dir: PathBuf,
    pub stub_dir: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let cache_dir = temp_dir.path().join("cache");
        let home_dir = temp_dir.path().join("home");
        let stub_dir = temp_dir.path().join("stubs");
        std::fs::create_dir_all(&cache_dir)?;
        std::fs::create_dir_all(home_dir.join("Library/Saved Searches"))?;
        std::fs::create_dir_all(&stub_dir)?;

        Ok(TestWorkspace {
            temp_dir,
            cache_dir,
            home_dir,
            stub_dir,
        })
    }

    /// Path of a saved search living in the fake home's Saved Searches dir
    pub fn saved_search_path(&self, name: &str) -> PathBuf {
        self.home_dir
            .join("Library/Saved Searches")
            .join(format!("{name}.savedSearch"))
    }

    /// A folder-navigator command wired to this workspace
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("folder-navigator").expect("binary builds");
        cmd.env("FOLDER_NAVIGATOR_CACHE_DIR", &self.cache_dir)
            .env("FOLDER_NAVIGATOR_HOME", &self.home_dir)
            .env("FOLDER_NAVIGATOR_MDFIND", self.stub_dir.join("mdfind"))
            .env("FOLDER_NAVIGATOR_PLUTIL", self.stub_dir.join("plutil"));
        cmd
    }

    pub fn artifact_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.txt"))
    }

    /// Poll for a cache artifact written by a detached background job.
    pub fn wait_for_artifact(&self, key: &str, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let path = self.artifact_path(key);
        while Instant::now() < deadline {
            if path.exists() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(25));
        }
        path.exists()
    }
}

/// Write an executable shell script into `path`.
pub fn write_script(path: &Path, body: &str) -> anyhow::Result<()> {
    std::fs::write(path, body)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    }
    Ok(())
}
