//! Git argument vectors
//!
//! A [`GitInvocation`] is the exact list of arguments handed to the `git`
//! binary. Nothing is ever passed through a shell, so shell metacharacters in
//! repository paths, branch names, remotes and file patterns are inert.
//!
//! Git itself still parses a leading `-` as an option. User values are
//! therefore either placed after a `--` end-of-options marker (clone, add) or
//! rejected when they start with `-` (remote, branch, target), where `--`
//! would change what git does with them.
//!
//! [`GitInvocation::command_line`] renders the equivalent shell-style command
//! (`git -C "<repo>" ...`) for logs and error messages only.

use crate::artifacts::error::{NodeError, NodeResult};
use crate::artifacts::operation::Operation;
use crate::artifacts::request::{GitAction, GitRequest};
use std::ffi::OsStr;

pub const GIT_PROGRAM: &str = "git";

pub const END_OF_OPTIONS: &str = "--";

/// One argument and how it is rendered in the display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Rendered as-is
    Plain(String),
    /// Rendered inside double quotes
    Quoted(String),
    /// Rendered inside double quotes, inner double quotes escaped
    Escaped(String),
}

impl Arg {
    pub fn value(&self) -> &str {
        match self {
            Arg::Plain(value) | Arg::Quoted(value) | Arg::Escaped(value) => value,
        }
    }

    fn render(&self) -> String {
        match self {
            Arg::Plain(value) => value.clone(),
            Arg::Quoted(value) => format!("\"{value}\""),
            Arg::Escaped(value) => format!("\"{}\"", escape_double_quotes(value)),
        }
    }
}

/// Prefix every `"` with a backslash, leave everything else untouched
pub fn escape_double_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInvocation {
    operation: Operation,
    args: Vec<Arg>,
}

impl GitInvocation {
    /// Start an invocation scoped to `repo_path`: `-C <repo_path> <keyword>`
    pub fn scoped(repo_path: &str, operation: Operation) -> Self {
        Self {
            operation,
            args: vec![
                Arg::Plain("-C".to_string()),
                Arg::Quoted(repo_path.to_string()),
                Arg::Plain(operation.keyword().to_string()),
            ],
        }
    }

    pub fn arg<S: Into<String>>(mut self, value: S) -> Self {
        self.args.push(Arg::Plain(value.into()));
        self
    }

    pub fn quoted_arg<S: Into<String>>(mut self, value: S) -> Self {
        self.args.push(Arg::Quoted(value.into()));
        self
    }

    pub fn escaped_arg<S: Into<String>>(mut self, value: S) -> Self {
        self.args.push(Arg::Escaped(value.into()));
        self
    }

    /// Everything after this marker is an operand, never an option
    pub fn end_of_options(self) -> Self {
        self.arg(END_OF_OPTIONS)
    }

    /// Append the value of parameter `name`, refusing anything git would
    /// read as an option
    pub fn name_arg(self, name: &str, value: &str) -> NodeResult<Self> {
        if value.starts_with('-') {
            return Err(NodeError::option_like_value(name, value));
        }

        Ok(self.arg(value))
    }

    /// Like [`GitInvocation::name_arg`], but an empty `value` is omitted
    pub fn optional_name_arg(self, name: &str, value: &str) -> NodeResult<Self> {
        if value.is_empty() {
            Ok(self)
        } else {
            self.name_arg(name, value)
        }
    }

    /// Map a request to its argument vector
    pub fn from_request(request: &GitRequest) -> NodeResult<Self> {
        let repo_path = request.repo_path.as_str();

        let invocation = match &request.action {
            GitAction::Clone {
                repo_url,
                target_path,
            } => Self::clone_repository(repo_path, repo_url, target_path),
            GitAction::Init => Self::init(repo_path),
            GitAction::Add { files } => Self::add(repo_path, files),
            GitAction::Commit { message } => Self::commit(repo_path, message),
            GitAction::Push { remote, branch } => Self::push(repo_path, remote, branch)?,
            GitAction::Pull { remote, branch } => Self::pull(repo_path, remote, branch)?,
            GitAction::Status => Self::status(repo_path),
            GitAction::Log => Self::log(repo_path),
            GitAction::Switch { target } => Self::switch(repo_path, target)?,
            GitAction::Checkout { target } => Self::checkout(repo_path, target)?,
            GitAction::Merge { target } => Self::merge(repo_path, target)?,
        };

        Ok(invocation)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Arguments exactly as the child process receives them
    pub fn args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(|arg| OsStr::new(arg.value()))
    }

    pub fn arg_values(&self) -> Vec<&str> {
        self.args.iter().map(Arg::value).collect()
    }

    /// Shell-style rendering with the default `git` program, for display only
    pub fn command_line(&self) -> String {
        self.command_line_with(GIT_PROGRAM)
    }

    /// Shell-style rendering headed by `program`
    pub fn command_line_with(&self, program: &str) -> String {
        std::iter::once(program.to_string())
            .chain(self.args.iter().map(Arg::render))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for GitInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_line())
    }
}
