use crate::areas::context::ExecutionContext;
use crate::areas::executor::Node;
use crate::artifacts::error::NodeResult;
use crate::artifacts::record::OutputRecord;

pub const NODE_NAME: &str = "Example";
pub const NAME: &str = "name";
pub const REVERSE: &str = "reverse";
pub const DEFAULT_NAME: &str = "World";

/// `Hello {name}!`, reversed as a whole when `reverse` is set
pub fn greeting(name: &str, reverse: bool) -> String {
    let greeting = format!("Hello {name}!");
    if reverse {
        greeting.chars().rev().collect()
    } else {
        greeting
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Example;

impl Node for Example {
    async fn execute_item<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &C,
        item_index: usize,
    ) -> NodeResult<OutputRecord> {
        let name = ctx.string_parameter(NAME, item_index, DEFAULT_NAME)?;
        let reverse = ctx.bool_parameter(REVERSE, item_index, false)?;

        Ok(OutputRecord::greeting(greeting(&name, reverse)))
    }
}
