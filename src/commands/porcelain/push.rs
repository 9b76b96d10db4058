use crate::artifacts::error::NodeResult;
use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;
use crate::artifacts::request::{BRANCH, REMOTE};

impl GitInvocation {
    /// An empty `remote` or `branch` is omitted; there is no way to pass a
    /// literally empty name. Names starting with `-` are rejected.
    pub fn push(repo_path: &str, remote: &str, branch: &str) -> NodeResult<Self> {
        Self::scoped(repo_path, Operation::Push)
            .optional_name_arg(REMOTE, remote)?
            .optional_name_arg(BRANCH, branch)
    }
}
