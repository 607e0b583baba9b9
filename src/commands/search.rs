//! The foreground search path: the launcher invokes this on every keystroke.
//!
//! Raw query -> navigation parse -> scope resolution -> make sure stale data
//! is being refreshed in the background -> serve whatever is cached right
//! now -> ranked filter -> JSON feedback (plus a re-poll hint while a
//! refresh is in flight). This path never runs the slow listing operation
//! and never waits on a job; worst case it answers "nothing yet, ask again
//! shortly".

use crate::core::{
    cache::{contents_key, FOLDERS_KEY},
    command_init::{CommandContext, CommandInit},
    error::Result,
    feedback::{Feedback, Item},
    matcher::filter_ranked,
    navigator::{self, NavResult},
    refresh::JobSpec,
    state::FolderRecord,
};
use std::io;
use std::path::Path;

pub fn execute_search(query: Vec<String>, folder: Option<String>) -> Result<()> {
    let ctx = CommandInit::initialize()?;
    let raw_query = query.join(" ");
    log::debug!("query: {raw_query:?}, explicit folder: {folder:?}");

    let mut feedback = Feedback::new();
    surface_refresh_warning(&ctx, &mut feedback);

    let repoll = match folder {
        Some(name) => search_named_folder(&ctx, &mut feedback, &name, raw_query.trim()),
        None => navigate(&ctx, &mut feedback, &raw_query),
    }?;

    if repoll {
        feedback.request_rerun(ctx.settings.rerun_delay);
    }

    log::debug!(
        "returning {} item(s), re-poll: {repoll}",
        feedback.items.len()
    );
    feedback.write_to(&mut io::stdout().lock())
}

/// Dispatch on the parsed navigation result. Returns the re-poll flag.
fn navigate(ctx: &CommandContext, feedback: &mut Feedback, raw_query: &str) -> Result<bool> {
    match navigator::parse(raw_query, &ctx.settings.delimiter) {
        NavResult::Backup => {
            // Leave the folder scope: back to the unfiltered root listing
            let (folders, repoll) = load_folders(ctx);
            push_folder_list(ctx, feedback, &folders, "", repoll);
            Ok(repoll)
        }
        NavResult::Enter { scope, residual } => {
            let (folders, mut repoll) = load_folders(ctx);
            match resolve_scope(&folders, &scope) {
                Some(record) => {
                    repoll |= push_folder_contents(ctx, feedback, record, &residual)?;
                }
                None => {
                    log::debug!("scope '{scope}' not in cached folder list");
                    feedback.push(Item::message(
                        format!("Unknown folder: {scope}"),
                        "No smart folder by that name or path",
                    ));
                }
            }
            Ok(repoll)
        }
        NavResult::Flat { residual } => {
            let (folders, mut repoll) = load_folders(ctx);
            // A query spelling out a folder name exactly reads as entering it
            let entered = if residual.is_empty() {
                None
            } else {
                resolve_scope(&folders, &residual)
            };
            if let Some(record) = entered {
                repoll |= push_folder_contents(ctx, feedback, record, "")?;
            } else {
                push_folder_list(ctx, feedback, &folders, &residual, repoll);
            }
            Ok(repoll)
        }
    }
}

/// `-f NAME` searches one folder directly, bypassing navigation.
fn search_named_folder(
    ctx: &CommandContext,
    feedback: &mut Feedback,
    name: &str,
    filter: &str,
) -> Result<bool> {
    let (folders, mut repoll) = load_folders(ctx);
    match resolve_scope(&folders, name) {
        Some(record) => {
            repoll |= push_folder_contents(ctx, feedback, record, filter)?;
            Ok(repoll)
        }
        None => {
            feedback.push(Item::message(
                format!("Unknown folder: {name}"),
                "No smart folder by that name or path",
            ));
            Ok(repoll)
        }
    }
}

/// Serve the cached folder list, kicking off a background refresh when it is
/// stale or absent. Cache trouble degrades to an empty list; it never kills
/// the keystroke.
fn load_folders(ctx: &CommandContext) -> (Vec<FolderRecord>, bool) {
    let repoll = JobSpec::refresh_folders()
        .and_then(|spec| {
            ctx.coordinator.refresh_if_stale(
                &ctx.cache,
                FOLDERS_KEY,
                ctx.settings.folders_max_age(),
                &spec,
            )
        })
        .unwrap_or_else(|e| {
            log::warn!("folder list refresh not started: {e}");
            false
        });

    let paths = ctx
        .cache
        .get(FOLDERS_KEY)
        .unwrap_or_else(|e| {
            log::warn!("folder list unavailable: {e}");
            None
        })
        .map(|entry| entry.lines)
        .unwrap_or_default();

    let records = paths
        .iter()
        .map(|path| FolderRecord::from_path(path.clone()))
        .collect();
    (records, repoll)
}

/// Case-insensitive display-name match, or exact path match.
fn resolve_scope<'a>(folders: &'a [FolderRecord], scope: &str) -> Option<&'a FolderRecord> {
    if scope.is_empty() {
        return None;
    }
    let folded = scope.to_lowercase();
    folders
        .iter()
        .find(|record| record.name.to_lowercase() == folded || record.path == scope)
}

/// Rank the folder list against `filter` and emit folder rows.
fn push_folder_list(
    ctx: &CommandContext,
    feedback: &mut Feedback,
    folders: &[FolderRecord],
    filter: &str,
    loading: bool,
) {
    if folders.is_empty() && loading {
        feedback.push(Item::message("Loading smart folders…", "Keep typing"));
        return;
    }

    let hits = filter_ranked(
        folders,
        filter,
        |record: &FolderRecord| record.name.clone(),
        ctx.settings.max_results,
    );
    log::debug!("{}/{} folder(s) match '{filter}'", hits.len(), folders.len());

    if hits.is_empty() && !filter.is_empty() {
        feedback.push(Item::message(
            format!("No folders matching '{filter}'"),
            "",
        ));
        return;
    }
    for record in hits {
        feedback.push(Item::folder(record, &ctx.settings.delimiter, &ctx.home));
    }
}

/// Serve a folder's cached contents filtered by `filter`, refreshing in the
/// background when stale. Returns the re-poll flag for this scope.
fn push_folder_contents(
    ctx: &CommandContext,
    feedback: &mut Feedback,
    record: &FolderRecord,
    filter: &str,
) -> Result<bool> {
    let key = contents_key(&record.path);
    let repoll = JobSpec::refresh_folder(&record.path)
        .and_then(|spec| {
            ctx.coordinator.refresh_if_stale(
                &ctx.cache,
                &key,
                ctx.settings.contents_max_age(),
                &spec,
            )
        })
        .unwrap_or_else(|e| {
            log::warn!("contents refresh for '{}' not started: {e}", record.name);
            false
        });

    let entry = ctx.cache.get(&key).unwrap_or_else(|e| {
        log::warn!("contents of '{}' unavailable: {e}", record.name);
        None
    });
    let files = entry.map(|entry| entry.lines).unwrap_or_default();

    if files.is_empty() && repoll {
        feedback.push(Item::message(
            format!("Loading '{}'…", record.name),
            "Contents are being indexed",
        ));
        return Ok(repoll);
    }

    let hits = filter_ranked(
        &files,
        filter,
        |path: &String| {
            Path::new(path.as_str())
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone())
        },
        ctx.settings.max_results,
    );
    log::debug!(
        "{}/{} file(s) in '{}' match '{filter}'",
        hits.len(),
        files.len(),
        record.name
    );

    for path in hits {
        feedback.push(Item::file(path, &ctx.home));
    }
    Ok(repoll)
}

fn surface_refresh_warning(ctx: &CommandContext, feedback: &mut Feedback) {
    let warning = ctx.cache.take_warning().unwrap_or_else(|e| {
        log::warn!("could not read refresh warning: {e}");
        None
    });
    if let Some(warning) = warning {
        log::debug!("surfacing refresh failure for '{}'", warning.key);
        feedback.push(Item::message(
            "Last refresh failed",
            warning.message.lines().next().unwrap_or_default(),
        ));
    }
}
