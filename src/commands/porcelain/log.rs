use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;

impl GitInvocation {
    pub fn log(repo_path: &str) -> Self {
        Self::scoped(repo_path, Operation::Log)
    }
}
