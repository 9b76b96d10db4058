//! Per-item batch execution
//!
//! Items are processed strictly in index order, one at a time. Each item ends
//! either succeeded (its record is appended) or failed. A failure becomes an
//! error record when the context enables continue-on-fail; otherwise it
//! aborts the batch and no later item is touched.

use crate::areas::context::ExecutionContext;
use crate::artifacts::error::{NodeOperationError, NodeResult};
use crate::artifacts::record::{OutputItem, OutputRecord};

#[allow(async_fn_in_trait)]
pub trait Node {
    /// Processes a single item of the batch
    async fn execute_item<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &C,
        item_index: usize,
    ) -> NodeResult<OutputRecord>;
}

/// Run `node` over every input item of `ctx`
///
/// On success the output has one item per input item, in input order.
pub async fn execute<N, C>(node: &N, ctx: &C) -> Result<Vec<OutputItem>, NodeOperationError>
where
    N: Node + ?Sized,
    C: ExecutionContext + ?Sized,
{
    let item_count = ctx.input_data().len();
    let mut output = Vec::with_capacity(item_count);

    for item_index in 0..item_count {
        tracing::debug!(node = %ctx.node().name, item_index, "processing item");

        match node.execute_item(ctx, item_index).await {
            Ok(record) => output.push(OutputItem::success(record)),
            Err(error) if ctx.continue_on_fail() => {
                tracing::warn!(node = %ctx.node().name, item_index, %error, "item failed, continuing");
                output.push(OutputItem::failure(error.to_string(), item_index));
            }
            Err(error) => {
                tracing::warn!(node = %ctx.node().name, item_index, %error, "item failed, aborting batch");
                return Err(NodeOperationError::new(
                    ctx.node().name.clone(),
                    item_index,
                    error,
                ));
            }
        }
    }

    Ok(output)
}
