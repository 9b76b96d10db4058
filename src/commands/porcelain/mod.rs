//! Porcelain commands
//!
//! One argument-vector builder per supported git operation. Every builder
//! starts from [`GitInvocation::scoped`](crate::artifacts::invocation::GitInvocation::scoped),
//! so each command runs as `git -C <repo_path> <keyword> ...`.
//!
//! ## Commands
//!
//! - `add`: Stage files or patterns
//! - `checkout`: Check out a branch or commit
//! - `clone`: Clone a repository into a target path
//! - `commit`: Record staged changes with a message
//! - `init`: Create an empty repository
//! - `log`: Show commit history
//! - `merge`: Merge a branch or commit
//! - `pull`: Fetch and integrate from a remote
//! - `push`: Update a remote
//! - `status`: Show working tree status
//! - `switch`: Switch branches

pub mod add;
pub mod checkout;
pub mod clone;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod pull;
pub mod push;
pub mod status;
pub mod switch;
