use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::operation::Operation;

impl GitInvocation {
    /// Each whitespace-separated pattern becomes its own pathspec.
    ///
    /// Patterns are not glob-expanded here; git matches pathspecs itself.
    pub fn add(repo_path: &str, files: &str) -> Self {
        files
            .split_whitespace()
            .fold(
                Self::scoped(repo_path, Operation::Add).end_of_options(),
                |invocation, pattern| invocation.arg(pattern),
            )
    }
}
