//! Test data generation: stub listing commands and pre-seeded cache state
//!
//! The stub `mdfind` dispatches on its first argument the way the real one
//! is invoked: `-s <name>` lists a saved search by name, the smart-folder
//! content-type query lists all folders, anything else is a raw query run.

#![allow(dead_code)]

use super::workspace::{write_script, TestWorkspace};
use folder_navigator::core::cache::{contents_key, FOLDERS_KEY};

/// Install an mdfind stub answering all three invocation shapes.
pub fn install_mdfind_stub(
    ws: &TestWorkspace,
    folders: &[&str],
    by_name: &[&str],
    by_query: &[&str],
) -> anyhow::Result<()> {
    std::fs::write(ws.stub_dir.join("folders_output.txt"), lines(folders))?;
    std::fs::write(ws.stub_dir.join("by_name_output.txt"), lines(by_name))?;
    std::fs::write(ws.stub_dir.join("by_query_output.txt"), lines(by_query))?;

    let body = format!(
        "#!/bin/sh\n\
         case \"$1\" in\n\
           -s) cat '{dir}/by_name_output.txt' ;;\n\
           kMDItemContentType*) cat '{dir}/folders_output.txt' ;;\n\
           *) cat '{dir}/by_query_output.txt' ;;\n\
         esac\n",
        dir = ws.stub_dir.display()
    );
    write_script(&ws.stub_dir.join("mdfind"), &body)
}

/// Like [`install_mdfind_stub`] for the root listing, but sleeping first so
/// the foreground invocation reliably observes an in-flight refresh.
pub fn install_slow_mdfind_stub(
    ws: &TestWorkspace,
    folders: &[&str],
    delay_secs: u32,
) -> anyhow::Result<()> {
    std::fs::write(ws.stub_dir.join("folders_output.txt"), lines(folders))?;
    let body = format!(
        "#!/bin/sh\nsleep {delay_secs}\ncat '{}/folders_output.txt'\n",
        ws.stub_dir.display()
    );
    write_script(&ws.stub_dir.join("mdfind"), &body)
}

/// Install an mdfind stub that always fails, for transient-error scenarios.
pub fn install_failing_mdfind_stub(ws: &TestWorkspace) -> anyhow::Result<()> {
    write_script(
        &ws.stub_dir.join("mdfind"),
        "#!/bin/sh\necho 'index unavailable' >&2\nexit 1\n",
    )
}

/// Install a plutil stub emitting the given JSON for any input plist.
pub fn install_plutil_stub(ws: &TestWorkspace, json: &str) -> anyhow::Result<()> {
    std::fs::write(ws.stub_dir.join("plutil_output.json"), json)?;
    let body = format!(
        "#!/bin/sh\ncat '{}/plutil_output.json'\n",
        ws.stub_dir.display()
    );
    write_script(&ws.stub_dir.join("plutil"), &body)
}

/// Seed the root folder listing artifact directly (fresh as of now).
pub fn seed_folders(ws: &TestWorkspace, paths: &[&str]) -> anyhow::Result<()> {
    std::fs::write(ws.artifact_path(FOLDERS_KEY), lines(paths))?;
    Ok(())
}

/// Seed the contents artifact for the folder at `folder_path`.
pub fn seed_contents(
    ws: &TestWorkspace,
    folder_path: &str,
    files: &[&str],
) -> anyhow::Result<String> {
    let key = contents_key(folder_path);
    std::fs::write(ws.artifact_path(&key), lines(files))?;
    Ok(key)
}

/// A workspace with three seeded folders and seeded contents for "Work".
pub fn seeded_workspace() -> anyhow::Result<(TestWorkspace, String)> {
    let ws = TestWorkspace::new()?;
    let work = ws.saved_search_path("Work");
    let reports = ws.saved_search_path("Reports");
    let presentations = ws.saved_search_path("Presentations");
    seed_folders(
        &ws,
        &[
            presentations.to_str().unwrap(),
            reports.to_str().unwrap(),
            work.to_str().unwrap(),
        ],
    )?;
    let work_path = work.to_string_lossy().into_owned();
    seed_contents(
        &ws,
        &work_path,
        &[
            "/files/report-2024.pdf",
            "/files/old-report.txt",
            "/files/notes.md",
        ],
    )?;
    // No background refresh should ever fire against seeded state, but give
    // the stub something sane to say if one does.
    install_mdfind_stub(&ws, &[], &[], &[])?;
    Ok((ws, work_path))
}

fn lines(entries: &[&str]) -> String {
    let mut out = entries.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
