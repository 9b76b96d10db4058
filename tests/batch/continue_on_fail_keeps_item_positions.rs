use crate::common::command::{run_node_command, source_repository, workspace_dir};
use crate::common::parse_output;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn continue_on_fail_keeps_item_positions(
    source_repository: TempDir,
    #[from(workspace_dir)] cwd: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = source_repository.path().display().to_string();
    let batch = json!({
        "node": { "name": "Git Extended" },
        "continueOnFail": true,
        "parameters": { "repoPath": repo },
        "items": [
            { "parameters": { "operation": "status" } },
            { "parameters": { "operation": "merge", "target": "no-such-branch" } },
            { "parameters": { "operation": "log" } }
        ]
    });

    let output = run_node_command(cwd.path(), &["run", "--node", "git"])
        .write_stdin(batch.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output = parse_output(&output);
    let items = output.as_array().ok_or("output must be an array")?;
    assert_eq!(items.len(), 3);

    assert!(items[0]["json"]["stdout"].is_string());
    assert!(items[0].get("pairedItem").is_none());

    assert_eq!(items[1]["pairedItem"], json!(1));
    let error = items[1]["json"]["error"].as_str().ok_or("error missing")?;
    assert!(error.starts_with("Command failed: git -C"));
    assert!(error.contains("merge no-such-branch"));

    assert!(
        items[2]["json"]["stdout"]
            .as_str()
            .is_some_and(|stdout| stdout.contains("init"))
    );

    Ok(())
}

#[rstest]
fn continue_on_fail_flag_overrides_batch_policy(
    #[from(workspace_dir)] cwd: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch = json!({
        "node": { "name": "Git Extended" },
        "items": [
            { "parameters": { "operation": "rebase" } },
            { "parameters": { "operation": "commit" } }
        ]
    });

    let output = run_node_command(cwd.path(), &["run", "--node", "git", "--continue-on-fail"])
        .write_stdin(batch.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        parse_output(&output),
        json!([
            { "json": { "error": "Unsupported operation rebase" }, "pairedItem": 0 },
            { "json": { "error": "Missing required parameter 'commitMessage'" }, "pairedItem": 1 }
        ])
    );

    Ok(())
}
