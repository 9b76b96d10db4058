//! Git command builders
//!
//! `porcelain` holds one builder per user-facing git operation; the
//! dispatcher in [`GitInvocation::from_request`](crate::artifacts::invocation::GitInvocation::from_request)
//! picks between them.

pub mod porcelain;
