use crate::artifacts::error::NodeResult;
use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;
use crate::artifacts::request::TARGET;

impl GitInvocation {
    pub fn merge(repo_path: &str, target: &str) -> NodeResult<Self> {
        Self::scoped(repo_path, Operation::Merge).name_arg(TARGET, target)
    }
}
