//! Consolidated test utilities for folder-navigator
//!
//! This module provides unified testing utilities for integration tests,
//! built around an isolated workspace (cache root, fake home, stubbed
//! listing commands) so tests never touch the real Spotlight index.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
