use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;

impl GitInvocation {
    pub fn status(repo_path: &str) -> Self {
        Self::scoped(repo_path, Operation::Status)
    }
}
