//! Core functionality for the folder-navigator tool.
//!
//! This module provides the building blocks for cached smart-folder
//! navigation: the file-backed cache store, freshness policy, background
//! refresh coordination, query navigation parsing, ranked matching and
//! launcher feedback.

pub mod cache;
pub mod command_init;
pub mod dirs;
pub mod error;
pub mod feedback;
pub mod freshness;
pub mod listing;
pub mod matcher;
pub mod navigator;
pub mod output;
pub mod refresh;
pub mod settings;
pub mod state;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{FolderNavigatorError, Result};

// === Cache store ===
// Keyed newline-delimited artifacts with atomic replace
pub use cache::{contents_key, CacheEntry, CacheStore, ERROR_KEY, FOLDERS_KEY};

// === Freshness policy ===
pub use freshness::is_fresh;

// === Background refresh ===
// Per-key job registry, liveness probing and staleness-driven launch
pub use refresh::{JobRegistry, JobSpec, RefreshCoordinator, RefreshOutcome};

// === Query navigation ===
// Raw query string -> Backup | Enter | Flat
pub use navigator::{parse, NavResult};

// === Ranked matching ===
// Prefix-before-substring filtering with stable tiers
pub use matcher::{filter_ranked, MatchTier};

// === Listing operation ===
// External mdfind/plutil invocations behind a strategy union
pub use listing::{strategy_for, Lister, ListingStrategy, SavedSearchQuery};

// === State types ===
pub use state::{FolderRecord, RefreshError, RefreshJobRecord, WarningStatus};

// === Launcher feedback ===
pub use feedback::{Feedback, Item};

// === Settings ===
pub use settings::Settings;

// === Command initialization ===
// One explicit context per invocation
pub use command_init::{CommandContext, CommandInit};

// === Terminal output ===
pub use output::{print_error, print_info, print_success};
