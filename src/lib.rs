//! Folder Navigator - instant type-ahead search over macOS Smart Folders.
//!
//! The launcher re-invokes the binary on every keystroke, so the foreground
//! path only ever serves what is already cached and arranges for stale data
//! to be refreshed by a detached background job, telling the host to poll
//! again shortly. This library provides the cache store, freshness policy,
//! refresh coordination, query navigation and ranked matching behind that.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Cache store and key derivation
//! - Background refresh coordination and job registry
//! - Query navigation parsing and ranked matching
//! - Launcher feedback serialization
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    contents_key,
    filter_ranked,
    is_fresh,
    // Query navigation
    parse,

    CacheEntry,
    // Cache store
    CacheStore,

    CommandContext,
    // Command initialization
    CommandInit,

    // Launcher feedback
    Feedback,
    // State types
    FolderRecord,
    // Error handling
    FolderNavigatorError,
    Item,

    JobRegistry,
    JobSpec,
    // Listing operation
    Lister,
    ListingStrategy,
    MatchTier,
    NavResult,
    // Background refresh
    RefreshCoordinator,
    RefreshError,
    RefreshJobRecord,
    RefreshOutcome,
    Result,
    // Settings
    Settings,

    ERROR_KEY,
    FOLDERS_KEY,
};
