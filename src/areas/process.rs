//! External process execution
//!
//! [`ProcessRunner`] is the boundary between a built [`GitInvocation`] and the
//! operating system. [`GitProcess`] spawns the real binary with the argument
//! vector directly, without a shell; tests substitute their own runner.

use crate::artifacts::error::{NodeError, NodeResult};
use crate::artifacts::invocation::{GIT_PROGRAM, GitInvocation};
use derive_new::new;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Captured, trimmed output of a successful process
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn from_raw(stdout: &[u8], stderr: &[u8]) -> Self {
        Self::new(
            String::from_utf8_lossy(stdout).trim().to_string(),
            String::from_utf8_lossy(stderr).trim().to_string(),
        )
    }
}

#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run one invocation to completion
    ///
    /// A non-zero exit status is an error; its output is kept in the error.
    async fn run(&self, invocation: &GitInvocation) -> NodeResult<ProcessOutput>;
}

/// Runs invocations with the `git` binary
#[derive(Debug, Clone)]
pub struct GitProcess {
    program: PathBuf,
}

impl Default for GitProcess {
    fn default() -> Self {
        Self::new(GIT_PROGRAM)
    }
}

impl GitProcess {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ProcessRunner for GitProcess {
    async fn run(&self, invocation: &GitInvocation) -> NodeResult<ProcessOutput> {
        let command_line = invocation.command_line_with(&self.program.to_string_lossy());
        tracing::debug!(command = %command_line, "spawning git");

        let output = Command::new(&self.program)
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| NodeError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        let captured = ProcessOutput::from_raw(&output.stdout, &output.stderr);

        if !output.status.success() {
            tracing::debug!(code = ?output.status.code(), command = %command_line, "git exited with failure");
            return Err(NodeError::CommandFailed {
                command: command_line,
                code: output.status.code(),
                stdout: captured.stdout,
                stderr: captured.stderr,
            });
        }

        Ok(captured)
    }
}
