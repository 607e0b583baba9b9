use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{fixtures::*, workspace::*};

use folder_navigator::core::cache::{contents_key, ERROR_KEY, FOLDERS_KEY};

#[cfg(test)]
mod refresh_command_tests {
    use super::*;

    #[test]
    fn test_refresh_writes_folder_list_artifact() -> anyhow::Result<()> {
        let ws = TestWorkspace::new()?;
        let work = ws.saved_search_path("Work");
        install_mdfind_stub(&ws, &[work.to_str().unwrap()], &[], &[])?;

        ws.command()
            .args(["refresh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cached 1 entries"));

        let artifact = std::fs::read_to_string(ws.artifact_path(FOLDERS_KEY))?;
        assert_eq!(artifact.trim(), work.to_str().unwrap());
        Ok(())
    }

    #[test]
    fn test_refresh_folder_lists_saved_search_by_name() -> anyhow::Result<()> {
        let ws = TestWorkspace::new()?;
        install_mdfind_stub(
            &ws,
            &[],
            &["/files/report-2024.pdf", "/files/notes.md"],
            &[],
        )?;

        let work = ws.saved_search_path("Work");
        ws.command()
            .args(["refresh", "--folder", work.to_str().unwrap()])
            .assert()
            .success();

        let key = contents_key(work.to_str().unwrap());
        let artifact = std::fs::read_to_string(ws.artifact_path(&key))?;
        assert_eq!(
            artifact.lines().collect::<Vec<_>>(),
            vec!["/files/report-2024.pdf", "/files/notes.md"]
        );
        Ok(())
    }

    #[test]
    fn test_refresh_folder_outside_library_reruns_raw_query() -> anyhow::Result<()> {
        let ws = TestWorkspace::new()?;
        install_mdfind_stub(&ws, &[], &[], &["/shared/budget.xlsx"])?;
        install_plutil_stub(
            &ws,
            &format!(
                r#"{{"RawQueryDict":{{"RawQuery":"kMDItemFSName = \"*.xlsx\"","SearchScopes":["kMDQueryScopeHome","{}"]}}}}"#,
                ws.home_dir.display()
            ),
        )?;

        // A saved search outside ~/Library/Saved Searches takes the
        // parse-the-plist strategy.
        let outside = ws.temp_dir.path().join("Everywhere.savedSearch");
        std::fs::write(&outside, "binary plist stand-in")?;

        ws.command()
            .args(["refresh", "--folder", outside.to_str().unwrap()])
            .assert()
            .success();

        let key = contents_key(outside.to_str().unwrap());
        let artifact = std::fs::read_to_string(ws.artifact_path(&key))?;
        assert_eq!(artifact.trim(), "/shared/budget.xlsx");
        Ok(())
    }

    #[test]
    fn test_failed_refresh_keeps_previous_payload() -> anyhow::Result<()> {
        let ws = TestWorkspace::new()?;
        let old = ws.saved_search_path("Old");
        seed_folders(&ws, &[old.to_str().unwrap()])?;
        install_failing_mdfind_stub(&ws)?;

        ws.command()
            .args(["refresh"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Listing command failed"));

        // Last-good-value: the artifact still holds the pre-failure payload
        let artifact = std::fs::read_to_string(ws.artifact_path(FOLDERS_KEY))?;
        assert_eq!(artifact.trim(), old.to_str().unwrap());

        // And the failure is on record for the next foreground invocation
        assert!(ws.artifact_path(ERROR_KEY).exists());
        Ok(())
    }

    #[test]
    fn test_successful_refresh_clears_error_record() -> anyhow::Result<()> {
        let ws = TestWorkspace::new()?;
        install_failing_mdfind_stub(&ws)?;
        ws.command().args(["refresh"]).assert().failure();
        assert!(ws.artifact_path(ERROR_KEY).exists());

        let work = ws.saved_search_path("Work");
        install_mdfind_stub(&ws, &[work.to_str().unwrap()], &[], &[])?;
        ws.command().args(["refresh"]).assert().success();

        assert!(!ws.artifact_path(ERROR_KEY).exists());
        Ok(())
    }

    #[test]
    fn test_refresh_with_empty_listing_writes_empty_artifact() -> anyhow::Result<()> {
        let ws = TestWorkspace::new()?;
        install_mdfind_stub(&ws, &[], &[], &[])?;

        ws.command().args(["refresh"]).assert().success();

        // An empty result is a valid payload, distinct from a cold cache
        let artifact = ws.artifact_path(FOLDERS_KEY);
        assert!(artifact.exists());
        assert_eq!(std::fs::read_to_string(artifact)?.trim(), "");
        Ok(())
    }
}
