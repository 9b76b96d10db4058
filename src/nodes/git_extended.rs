//! Git node
//!
//! For each item: resolve a [`GitRequest`] from the item's parameters, map it
//! to a [`GitInvocation`] and run it. The item's record holds the trimmed
//! stdout/stderr of the git process.

use crate::areas::context::ExecutionContext;
use crate::areas::executor::Node;
use crate::areas::process::{GitProcess, ProcessRunner};
use crate::artifacts::error::NodeResult;
use crate::artifacts::invocation::GitInvocation;
use crate::artifacts::record::OutputRecord;
use crate::artifacts::request::GitRequest;

pub const NODE_NAME: &str = "Git Extended";

#[derive(Debug, Clone, Default)]
pub struct GitExtended<R = GitProcess> {
    runner: R,
}

impl<R: ProcessRunner> GitExtended<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: ProcessRunner> Node for GitExtended<R> {
    async fn execute_item<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &C,
        item_index: usize,
    ) -> NodeResult<OutputRecord> {
        let request = GitRequest::from_context(ctx, item_index)?;
        let invocation = GitInvocation::from_request(&request)?;
        tracing::info!(item_index, command = %invocation, "running git");

        let output = self.runner.run(&invocation).await?;

        Ok(OutputRecord::process(output.stdout, output.stderr))
    }
}
