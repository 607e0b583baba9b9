//! Launcher feedback serialization.
//!
//! The host launcher re-invokes this program on every keystroke and reads a
//! JSON document from stdout: a list of result items plus an optional
//! `rerun` delay asking it to invoke us again shortly (the re-poll hint
//! while a background refresh is in flight).
//!
//! # Public API
//! - [`Feedback`]: the top-level document (`items` + optional `rerun`)
//! - [`Item`]: one result row with builder constructors

use crate::core::state::FolderRecord;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const SMART_FOLDER_FILETYPE: &str = "com.apple.finder.smart-folder";

/// Replace a leading home prefix with `~` for display.
pub fn shorten_path(path: &str, home: &Path) -> String {
    let home = home.to_string_lossy();
    match path.strip_prefix(home.as_ref()) {
        // Component boundary: "/Users/meow" must not shorten under "/Users/me"
        Some(rest) if home.len() > 1 && (rest.is_empty() || rest.starts_with('/')) => {
            format!("~{rest}")
        }
        _ => path.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub path: String,
}

/// One result row shown by the launcher
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    pub valid: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Item {
    /// Row for a smart folder; selecting it autocompletes into the folder
    /// scope (`"Name ⟩ "`).
    pub fn folder(record: &FolderRecord, delimiter: &str, home: &Path) -> Self {
        Item {
            title: record.name.clone(),
            subtitle: shorten_path(&record.path, home),
            uid: Some(record.path.clone()),
            arg: Some(record.path.clone()),
            autocomplete: Some(format!("{} {delimiter} ", record.name)),
            valid: true,
            kind: None,
            icon: Some(Icon {
                kind: Some("filetype".to_string()),
                path: SMART_FOLDER_FILETYPE.to_string(),
            }),
        }
    }

    /// Row for a file inside a folder scope
    pub fn file(path: &str, home: &Path) -> Self {
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        Item {
            title: name,
            subtitle: shorten_path(path, home),
            uid: Some(path.to_string()),
            arg: Some(path.to_string()),
            autocomplete: None,
            valid: true,
            kind: Some("file".to_string()),
            icon: Some(Icon {
                kind: Some("fileicon".to_string()),
                path: path.to_string(),
            }),
        }
    }

    /// Unselectable informational row
    pub fn message(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Item {
            title: title.into(),
            subtitle: subtitle.into(),
            uid: None,
            arg: None,
            autocomplete: None,
            valid: false,
            kind: None,
            icon: None,
        }
    }
}

/// The JSON document handed back to the launcher
#[derive(Debug, Default, Serialize)]
pub struct Feedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerun: Option<f32>,
    pub items: Vec<Item>,
}

impl Feedback {
    pub fn new() -> Self {
        Feedback::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Ask the host to re-invoke us after `delay` seconds.
    pub fn request_rerun(&mut self, delay: f32) {
        self.rerun = Some(delay);
    }

    pub fn write_to(&self, writer: &mut impl Write) -> crate::core::error::Result<()> {
        serde_json::to_writer(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
