//! The background job body: refresh exactly one cache key.
//!
//! Launched detached by the refresh coordinator (or run by hand). Performs
//! the slow listing operation, atomically replaces the key's artifact on
//! success and clears the error record; on failure it records the error and
//! leaves the previous payload untouched, so transient trouble never erases
//! still-useful data.

use crate::core::{
    cache::{contents_key, FOLDERS_KEY},
    command_init::CommandInit,
    error::Result,
    output::print_success,
    state::RefreshError,
};
use std::path::Path;

pub fn execute_refresh(folder: Option<String>) -> Result<()> {
    let ctx = CommandInit::initialize()?;

    let (key, listed) = match &folder {
        Some(path) => {
            log::debug!("refreshing contents of '{path}'");
            (
                contents_key(path),
                ctx.lister.folder_contents(Path::new(path)),
            )
        }
        None => {
            log::debug!("refreshing smart folder list");
            (FOLDERS_KEY.to_string(), ctx.lister.list_folders())
        }
    };

    match listed {
        Ok(lines) => {
            ctx.cache.put(&key, &lines)?;
            ctx.cache.clear_error()?;
            print_success(&format!("Cached {} entries for '{key}'", lines.len()));
            Ok(())
        }
        Err(e) => {
            log::warn!("refresh of '{key}' failed: {e}");
            if let Err(record_err) = ctx
                .cache
                .record_error(&RefreshError::new(&key, e.to_string()))
            {
                log::warn!("could not record refresh error: {record_err}");
            }
            Err(e)
        }
    }
}
