//! Workflow nodes for running git
//!
//! - [`nodes::git_extended::GitExtended`]: maps each item's parameters to a
//!   git argument vector and relays the process output
//! - [`nodes::example::Example`]: greeting transform
//!
//! Both run through [`areas::executor::execute`], which owns the per-item
//! failure policy.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod nodes;

pub use areas::context::{BatchContext, ExecutionContext, InputItem, NodeIdentity};
pub use areas::executor::{Node, execute};
pub use areas::process::{GitProcess, ProcessOutput, ProcessRunner};
pub use artifacts::error::{NodeError, NodeOperationError, NodeResult};
pub use artifacts::invocation::GitInvocation;
pub use artifacts::operation::Operation;
pub use artifacts::record::{OutputItem, OutputRecord};
pub use artifacts::request::{GitAction, GitRequest};
pub use nodes::example::Example;
pub use nodes::git_extended::GitExtended;
