//! The slow external listing operation.
//!
//! Everything here runs only inside background refresh jobs (or the explicit
//! `refresh` subcommand); the foreground path never calls into this module.
//!
//! # Public API
//! - [`Lister`]: spawns `mdfind`/`plutil` and returns path lists
//! - [`ListingStrategy`]: how a folder's contents are obtained
//! - [`strategy_for`]: pick the strategy from the saved-search path
//!
//! Two strategies exist for a folder's contents: saved searches living in
//! the user's `Library/Saved Searches` can be run by name (`mdfind -s`),
//! anything else is read as a plist and its raw query re-run with the
//! recorded search scopes. The choice is an explicit tagged union selected
//! by a path predicate.

use crate::core::error::{FolderNavigatorError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program override hooks, primarily for tests
pub const MDFIND_ENV: &str = "FOLDER_NAVIGATOR_MDFIND";
pub const PLUTIL_ENV: &str = "FOLDER_NAVIGATOR_PLUTIL";

/// Spotlight query matching every smart folder on the system
const SMART_FOLDER_QUERY: &str = "kMDItemContentType == com.apple.finder.smart-folder";

/// Saved searches under this home-relative directory can be run by name
const SAVED_SEARCHES_DIR: &str = "Library/Saved Searches";

/// How to list the contents of a saved-search file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStrategy {
    /// `mdfind -s <name>`: the search lives in `Library/Saved Searches`
    SavedSearch { name: String },
    /// Parse the plist and re-run its raw query with its scopes
    QueryPlist { path: PathBuf },
}

/// Select the listing strategy for the saved search at `path`.
pub fn strategy_for(path: &Path, home: &Path) -> ListingStrategy {
    if path.starts_with(home.join(SAVED_SEARCHES_DIR)) {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        ListingStrategy::SavedSearch { name }
    } else {
        ListingStrategy::QueryPlist {
            path: path.to_path_buf(),
        }
    }
}

/// Raw query and scopes recorded inside a saved-search plist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSearchQuery {
    pub query: String,
    pub scopes: Vec<String>,
}

#[derive(Deserialize)]
struct SavedSearchPlist {
    #[serde(rename = "RawQueryDict")]
    raw_query_dict: RawQueryDict,
}

#[derive(Deserialize)]
struct RawQueryDict {
    #[serde(rename = "RawQuery")]
    raw_query: String,
    #[serde(rename = "SearchScopes")]
    search_scopes: Vec<String>,
}

/// Parse the JSON form of a saved-search plist (as emitted by
/// `plutil -convert json`).
pub fn parse_saved_search(json: &str, path: &Path) -> Result<SavedSearchQuery> {
    let plist: SavedSearchPlist = serde_json::from_str(json)
        .map_err(|e| FolderNavigatorError::saved_search_parse_failed(path, e.to_string()))?;
    Ok(SavedSearchQuery {
        query: plist.raw_query_dict.raw_query,
        scopes: plist.raw_query_dict.search_scopes,
    })
}

/// Map recorded search scopes onto real directories. The home sentinel
/// becomes the home directory, the computer sentinel means "no -onlyin
/// restriction" and is skipped, and scopes that no longer exist on disk are
/// dropped.
pub fn resolve_scopes(scopes: &[String], home: &Path) -> Vec<PathBuf> {
    let mut resolved = Vec::new();
    for scope in scopes {
        match scope.as_str() {
            "kMDQueryScopeHome" => resolved.push(home.to_path_buf()),
            "kMDQueryScopeComputer" => continue,
            other => {
                let path = PathBuf::from(other);
                if path.exists() {
                    resolved.push(path);
                } else {
                    log::debug!("skipping missing search scope '{other}'");
                }
            }
        }
    }
    resolved
}

/// Spawns the external listing commands and collects their output
pub struct Lister {
    mdfind: String,
    plutil: String,
    home: PathBuf,
}

impl Lister {
    pub fn new(home: PathBuf) -> Self {
        Lister {
            mdfind: std::env::var(MDFIND_ENV).unwrap_or_else(|_| "mdfind".to_string()),
            plutil: std::env::var(PLUTIL_ENV).unwrap_or_else(|_| "plutil".to_string()),
            home,
        }
    }

    /// List every smart folder on the system, sorted by display name.
    pub fn list_folders(&self) -> Result<Vec<String>> {
        log::debug!("querying mds for smart folders");
        let mut paths = self.run_lines(&self.mdfind, &[SMART_FOLDER_QUERY.to_string()])?;
        paths.sort_by(|a, b| {
            let stem = |p: &str| {
                Path::new(p)
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_lowercase())
                    .unwrap_or_default()
            };
            stem(a).cmp(&stem(b)).then_with(|| a.cmp(b))
        });
        log::debug!("{} smart folder(s) found", paths.len());
        Ok(paths)
    }

    /// List the files inside the saved search at `path`.
    pub fn folder_contents(&self, path: &Path) -> Result<Vec<String>> {
        let files = match strategy_for(path, &self.home) {
            ListingStrategy::SavedSearch { name } => {
                log::debug!("listing saved search '{name}' by name");
                self.run_lines(&self.mdfind, &["-s".to_string(), name])?
            }
            ListingStrategy::QueryPlist { path } => {
                let search = self.saved_search_query(&path)?;
                log::debug!(
                    "listing '{}' via raw query '{}' in {} scope(s)",
                    path.display(),
                    search.query,
                    search.scopes.len()
                );
                let mut args = Vec::new();
                for scope in resolve_scopes(&search.scopes, &self.home) {
                    args.push("-onlyin".to_string());
                    args.push(scope.to_string_lossy().into_owned());
                }
                args.push(search.query);
                self.run_lines(&self.mdfind, &args)?
            }
        };
        log::debug!("{} file(s) in folder '{}'", files.len(), path.display());
        Ok(files)
    }

    fn saved_search_query(&self, path: &Path) -> Result<SavedSearchQuery> {
        let args = [
            "-convert".to_string(),
            "json".to_string(),
            "-o".to_string(),
            "-".to_string(),
            path.to_string_lossy().into_owned(),
        ];
        let json = self.run_raw(&self.plutil, &args)?;
        parse_saved_search(&json, path)
    }

    fn run_lines(&self, program: &str, args: &[String]) -> Result<Vec<String>> {
        let output = self.run_raw(program, args)?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    fn run_raw(&self, program: &str, args: &[String]) -> Result<String> {
        log::debug!("running {program} {args:?}");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| FolderNavigatorError::listing_spawn_failed(program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FolderNavigatorError::listing_failed(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
