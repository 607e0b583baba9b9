use crate::core::error::{FolderNavigatorError, Result};
use std::path::PathBuf;

/// Environment variable naming the cache root. When set, the directory must
/// already exist; a missing path is a fatal configuration error.
pub const CACHE_DIR_ENV: &str = "FOLDER_NAVIGATOR_CACHE_DIR";

/// Environment variable overriding the home directory used for
/// path-shortening and saved-search scope mapping.
pub const HOME_ENV: &str = "FOLDER_NAVIGATOR_HOME";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join("folder-navigator"))
}

/// Resolve the cache root holding listing artifacts and pid records.
///
/// An explicitly supplied root must exist. The derived fallback is created
/// on demand so first runs work without any setup.
pub fn get_cache_root() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
        let path = PathBuf::from(dir);
        if !path.is_dir() {
            return Err(FolderNavigatorError::cache_root_missing(path));
        }
        return Ok(path);
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".cache")),
        "macos" => dirs::home_dir().unwrap_or_default().join("Library/Caches"),
        _ => dirs::cache_dir().ok_or(FolderNavigatorError::CacheDirectoryNotFound)?,
    };

    let root = base.join("folder-navigator");
    std::fs::create_dir_all(&root)
        .map_err(|e| FolderNavigatorError::cache_directory_creation_failed(&root, e))?;
    Ok(root)
}

/// Home directory used for `~` shortening and `kMDQueryScopeHome` mapping.
pub fn get_home_directory() -> PathBuf {
    std::env::var(HOME_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default())
}
