//! Typed Git request
//!
//! [`GitRequest`] is the plain configuration value the dispatcher works on.
//! [`GitRequest::from_context`] is the only place that knows the host's
//! parameter names and defaults.

use crate::areas::context::ExecutionContext;
use crate::artifacts::error::NodeResult;
use crate::artifacts::operation::Operation;
use derive_new::new;
use serde::{Deserialize, Serialize};

pub const OPERATION: &str = "operation";
pub const REPO_PATH: &str = "repoPath";
pub const REPO_URL: &str = "repoUrl";
pub const TARGET_PATH: &str = "targetPath";
pub const FILES: &str = "files";
pub const COMMIT_MESSAGE: &str = "commitMessage";
pub const REMOTE: &str = "remote";
pub const BRANCH: &str = "branch";
pub const TARGET: &str = "target";

pub const DEFAULT_REPO_PATH: &str = ".";
pub const DEFAULT_TARGET_PATH: &str = ".";
pub const DEFAULT_FILES: &str = ".";
pub const DEFAULT_REMOTE: &str = "origin";

/// Operation plus the fields that operation needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum GitAction {
    Add { files: String },
    Checkout { target: String },
    Clone { repo_url: String, target_path: String },
    Commit { message: String },
    Init,
    Log,
    Merge { target: String },
    /// Empty `remote`/`branch` mean "omit", not "pass an empty argument"
    Pull { remote: String, branch: String },
    Push { remote: String, branch: String },
    Status,
    Switch { target: String },
}

impl GitAction {
    pub fn operation(&self) -> Operation {
        match self {
            GitAction::Add { .. } => Operation::Add,
            GitAction::Checkout { .. } => Operation::Checkout,
            GitAction::Clone { .. } => Operation::Clone,
            GitAction::Commit { .. } => Operation::Commit,
            GitAction::Init => Operation::Init,
            GitAction::Log => Operation::Log,
            GitAction::Merge { .. } => Operation::Merge,
            GitAction::Pull { .. } => Operation::Pull,
            GitAction::Push { .. } => Operation::Push,
            GitAction::Status => Operation::Status,
            GitAction::Switch { .. } => Operation::Switch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GitRequest {
    /// Passed to git as `-C <repo_path>`, never used as the working directory
    pub repo_path: String,
    #[serde(flatten)]
    pub action: GitAction,
}

impl GitRequest {
    /// Resolve an item's parameters into a request
    ///
    /// Fails with `UnsupportedOperation` for an unknown selector and with
    /// `MissingParameter` when a required value is empty; both happen before
    /// anything is executed.
    pub fn from_context<C: ExecutionContext + ?Sized>(
        ctx: &C,
        item_index: usize,
    ) -> NodeResult<Self> {
        let raw_operation =
            ctx.string_parameter(OPERATION, item_index, Operation::default().keyword())?;
        let operation = Operation::try_parse(&raw_operation)?;
        let repo_path = ctx.string_parameter(REPO_PATH, item_index, DEFAULT_REPO_PATH)?;

        let action = match operation {
            Operation::Add => GitAction::Add {
                files: ctx.string_parameter(FILES, item_index, DEFAULT_FILES)?,
            },
            Operation::Checkout => GitAction::Checkout {
                target: ctx.required_string_parameter(TARGET, item_index)?,
            },
            Operation::Clone => GitAction::Clone {
                repo_url: ctx.required_string_parameter(REPO_URL, item_index)?,
                target_path: ctx.string_parameter(TARGET_PATH, item_index, DEFAULT_TARGET_PATH)?,
            },
            Operation::Commit => GitAction::Commit {
                message: ctx.required_string_parameter(COMMIT_MESSAGE, item_index)?,
            },
            Operation::Init => GitAction::Init,
            Operation::Log => GitAction::Log,
            Operation::Merge => GitAction::Merge {
                target: ctx.required_string_parameter(TARGET, item_index)?,
            },
            Operation::Pull => GitAction::Pull {
                remote: ctx.string_parameter(REMOTE, item_index, DEFAULT_REMOTE)?,
                branch: ctx.string_parameter(BRANCH, item_index, "")?,
            },
            Operation::Push => GitAction::Push {
                remote: ctx.string_parameter(REMOTE, item_index, DEFAULT_REMOTE)?,
                branch: ctx.string_parameter(BRANCH, item_index, "")?,
            },
            Operation::Status => GitAction::Status,
            Operation::Switch => GitAction::Switch {
                target: ctx.required_string_parameter(TARGET, item_index)?,
            },
        };

        Ok(Self::new(repo_path, action))
    }

    pub fn operation(&self) -> Operation {
        self.action.operation()
    }
}
