use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;

impl GitInvocation {
    /// `git -C <repo_path> clone -- <repo_url> <target_path>`
    ///
    /// A relative `target_path` is resolved by git against `repo_path`.
    pub fn clone_repository(repo_path: &str, repo_url: &str, target_path: &str) -> Self {
        Self::scoped(repo_path, Operation::Clone)
            .end_of_options()
            .arg(repo_url)
            .quoted_arg(target_path)
    }
}
