//! Common assertion helpers for launcher feedback validation
//!
//! The binary answers with a compact JSON document on stdout; these
//! predicates check for items and the re-poll hint without a full parse.

#![allow(dead_code)]

use predicates::prelude::*;

/// The feedback asks the host to re-invoke shortly
pub fn has_rerun() -> impl Predicate<str> {
    predicates::str::contains("\"rerun\"")
}

/// The feedback is final: no re-poll hint
pub fn no_rerun() -> impl Predicate<str> {
    predicates::str::contains("\"rerun\"").not()
}

/// An item with the exact given title exists
pub fn has_item_title(title: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("\"title\":\"{title}\""))
}

/// No item with the exact given title exists
pub fn lacks_item_title(title: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("\"title\":\"{title}\"")).not()
}

/// The unknown-scope "not found" row
pub fn has_unknown_folder(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Unknown folder: {name}"))
}

/// The transient-refresh-failure warning row
pub fn has_refresh_warning() -> impl Predicate<str> {
    predicates::str::contains("Last refresh failed")
}

/// Title `first` appears before title `second` in the ranked output
pub fn title_order(first: &str, second: &str) -> impl Predicate<str> {
    let first = format!("\"title\":\"{first}\"");
    let second = format!("\"title\":\"{second}\"");
    predicates::function::function(move |out: &str| {
        match (out.find(&first), out.find(&second)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    })
}
