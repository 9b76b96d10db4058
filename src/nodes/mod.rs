//! Workflow nodes
//!
//! - `example`: pure greeting transform
//! - `git_extended`: runs one git command per item

pub mod example;
pub mod git_extended;
