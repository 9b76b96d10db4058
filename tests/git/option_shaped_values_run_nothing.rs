use crate::common::command::{
    git_stdout, run_git_operation, run_node_command, source_repository, workspace_dir,
};
use assert_fs::TempDir;
use assert_fs::fixture::PathChild;
use git_extended::{BatchContext, GitExtended, GitProcess, NodeError, execute};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn upload_pack_in_repo_url_runs_no_command(
    source_repository: TempDir,
    #[from(workspace_dir)] scratch: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let work = scratch.child("work");
    std::fs::create_dir(work.path())?;
    let marker = scratch.child("PWNED");
    let repo_url = format!(
        "--upload-pack=touch {};git-upload-pack",
        marker.path().display()
    );
    let target_path = format!("file://{}", source_repository.path().display());

    let ctx = BatchContext::new("Git Extended")
        .with_parameter("operation", "clone")
        .with_parameter("repoPath", work.path().display().to_string())
        .with_parameter("repoUrl", repo_url)
        .with_parameter("targetPath", target_path);

    let err = execute(&GitExtended::new(GitProcess::default()), &ctx)
        .await
        .expect_err("option-shaped url is not a repository");

    assert!(matches!(err.source, NodeError::CommandFailed { .. }));
    assert!(!marker.path().exists());

    Ok(())
}

#[rstest]
fn orphan_target_is_rejected_before_git_runs(
    source_repository: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = source_repository.path();
    let branch = git_stdout(repo, &["symbolic-ref", "--short", "HEAD"]);

    run_git_operation(repo, "switch", repo, &["--target=--orphan=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Parameter 'target' must not start with '-': --orphan=x",
        ))
        .stderr(predicate::str::contains("item 0"));

    assert_eq!(git_stdout(repo, &["symbolic-ref", "--short", "HEAD"]), branch);

    Ok(())
}

#[rstest]
fn custom_git_binary_is_named_in_errors(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing = workspace_dir.child("no-such-git");
    let program = missing.path().display().to_string();

    run_node_command(workspace_dir.path(), &["--git-binary", &program, "git", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("{program} -C")));

    Ok(())
}
