use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_EMAIL: &str = "fake_email@email.com";

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with author config and one committed README.md
#[fixture]
pub fn source_repository(workspace_dir: TempDir) -> TempDir {
    run_git_command(workspace_dir.path(), &["init"])
        .assert()
        .success();
    configure_author(workspace_dir.path());

    write_file(FileSpec::new(
        workspace_dir.path().join("README.md"),
        "hello".to_string(),
    ));

    run_git_command(workspace_dir.path(), &["add", "README.md"])
        .assert()
        .success();
    run_git_command(workspace_dir.path(), &["commit", "-m", "init"])
        .assert()
        .success();

    workspace_dir
}

pub fn run_node_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-extended").expect("Failed to find git-extended binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// `git-extended git <operation> --repo-path <repo> <extra...>`
pub fn run_git_operation(dir: &Path, operation: &str, repo: &Path, extra: &[&str]) -> Command {
    let repo = repo.display().to_string();
    let mut args = vec!["git", operation, "--repo-path", repo.as_str()];
    args.extend_from_slice(extra);
    run_node_command(dir, &args)
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn configure_author(dir: &Path) {
    run_git_command(dir, &["config", "user.name", AUTHOR_NAME])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.email", AUTHOR_EMAIL])
        .assert()
        .success();
    run_git_command(dir, &["config", "commit.gpgsign", "false"])
        .assert()
        .success();
}

/// Trimmed stdout of a raw git command
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
