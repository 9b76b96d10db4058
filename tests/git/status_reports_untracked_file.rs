use crate::common::command::{run_git_operation, source_repository, workspace_dir};
use crate::common::file::write_generated_file;
use crate::common::parse_output;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn status_reports_untracked_file(
    source_repository: TempDir,
    #[from(workspace_dir)] cwd: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = write_generated_file(source_repository.path());
    let file_name = file
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or("generated file has no name")?
        .to_string();

    // run from an unrelated directory: the repository comes from -C only
    let output = run_git_operation(cwd.path(), "status", source_repository.path(), &[])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output = parse_output(&output);
    let stdout = output[0]["json"]["stdout"].as_str().ok_or("stdout missing")?;
    assert!(stdout.contains("Untracked files"));
    assert!(stdout.contains(&file_name));

    Ok(())
}
