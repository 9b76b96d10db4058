use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;

impl GitInvocation {
    /// The message is one argument and reaches git unchanged; only its
    /// display form escapes double quotes.
    pub fn commit(repo_path: &str, message: &str) -> Self {
        Self::scoped(repo_path, Operation::Commit)
            .arg("-m")
            .escaped_arg(message)
    }
}
