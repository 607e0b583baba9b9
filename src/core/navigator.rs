//! Query navigation parsing.
//!
//! A single free-text query string carries both "which folder am I inside"
//! and "what am I filtering for". This module parses the raw string into a
//! tagged [`NavResult`] on every invocation; no navigation state is ever
//! persisted between keystrokes.
//!
//! # Public API
//! - [`NavResult`]: `Backup` | `Enter` | `Flat`
//! - [`parse`]: raw query + delimiter -> [`NavResult`]
//!
//! # Semantics
//! - A query ending with the delimiter is a `Backup` signal: leave the
//!   current folder scope, return to the root listing.
//! - Otherwise the first delimiter occurrence splits the query into a scope
//!   name and a residual filter (`Enter`). Later delimiters stay part of the
//!   residual.
//! - With no delimiter the query filters the current level (`Flat`).
//!
//! Resolving the scope name against known folders is the caller's job; the
//! parser knows nothing about folders.

/// Outcome of parsing a raw query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavResult {
    /// Pop one navigation level
    Backup,
    /// Enter the named scope and filter it with `residual`
    Enter { scope: String, residual: String },
    /// No scope change; filter the current level
    Flat { residual: String },
}

/// Parse `raw` into a [`NavResult`] using `delimiter` as the scope separator.
pub fn parse(raw: &str, delimiter: &str) -> NavResult {
    // Exact trailing delimiter only: the launcher autocompletes to
    // "Name ⟩ ", and that trailing space must read as Enter, not Backup.
    if !delimiter.is_empty() && raw.ends_with(delimiter) {
        return NavResult::Backup;
    }

    if let Some(i) = raw.find(delimiter).filter(|_| !delimiter.is_empty()) {
        let scope = raw[..i].trim().to_string();
        let residual = raw[i + delimiter.len()..].trim().to_string();
        return NavResult::Enter { scope, residual };
    }

    NavResult::Flat {
        residual: raw.trim().to_string(),
    }
}
