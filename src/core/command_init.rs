//! Centralized per-invocation initialization.
//!
//! Every invocation builds one [`CommandContext`] up front and passes it to
//! whatever it touches; no component reaches for module-level state. The
//! context lives for exactly one invocation.
//!
//! # Public API
//! - [`CommandInit`]: builds the context
//! - [`CommandContext`]: settings, resolved paths, cache store, coordinator
//!
//! # Initialization Steps
//! 1. **Settings**: optional config file, defaults otherwise (a malformed
//!    file degrades to defaults with a warning rather than killing the
//!    keystroke)
//! 2. **Cache root**: env-supplied or derived; a missing env-supplied root
//!    is fatal before any cache work happens
//! 3. **Stores**: cache store, refresh coordinator and lister over that root

use crate::core::cache::CacheStore;
use crate::core::dirs::{get_cache_root, get_home_directory};
use crate::core::error::Result;
use crate::core::listing::Lister;
use crate::core::refresh::RefreshCoordinator;
use crate::core::settings::Settings;
use std::path::PathBuf;

/// Everything an invocation needs, constructed once
pub struct CommandContext {
    pub settings: Settings,
    pub home: PathBuf,
    pub cache: CacheStore,
    pub coordinator: RefreshCoordinator,
    pub lister: Lister,
}

/// Builds the per-invocation [`CommandContext`]
pub struct CommandInit;

impl CommandInit {
    pub fn initialize() -> Result<CommandContext> {
        let settings = Settings::load().unwrap_or_else(|e| {
            log::warn!("ignoring unreadable config: {e}");
            Settings::default()
        });

        let cache_root = get_cache_root()?;
        log::debug!("cache root: {}", cache_root.display());

        let home = get_home_directory();
        let cache = CacheStore::new(cache_root.clone());
        let coordinator = RefreshCoordinator::new(&cache_root);
        let lister = Lister::new(home.clone());

        Ok(CommandContext {
            settings,
            home,
            cache,
            coordinator,
            lister,
        })
    }
}
