use crate::artifacts::error::NodeResult;
use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;
use crate::artifacts::request::{BRANCH, REMOTE};

impl GitInvocation {
    /// Same token rules as [`GitInvocation::push`].
    pub fn pull(repo_path: &str, remote: &str, branch: &str) -> NodeResult<Self> {
        Self::scoped(repo_path, Operation::Pull)
            .optional_name_arg(REMOTE, remote)?
            .optional_name_arg(BRANCH, branch)
    }
}
