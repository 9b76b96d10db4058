use crate::artifacts::error::NodeResult;
use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;
use crate::artifacts::request::TARGET;

impl GitInvocation {
    /// No `--` marker here: after it git reads `target` as a pathspec.
    pub fn checkout(repo_path: &str, target: &str) -> NodeResult<Self> {
        Self::scoped(repo_path, Operation::Checkout).name_arg(TARGET, target)
    }
}
