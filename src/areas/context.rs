//! Host execution context
//!
//! The host hands a node its input batch, resolves parameters per item and
//! decides the batch failure policy. [`ExecutionContext`] captures that
//! contract so nodes never depend on a particular host runtime.
//!
//! ## Parameter resolution
//!
//! For [`BatchContext`] a parameter is looked up in this order:
//! 1. the item's own `parameters` overrides
//! 2. the node-level `parameters`
//! 3. the default supplied by the caller of the typed getter
//!
//! A JSON `null` counts as absent.

use crate::artifacts::error::{NodeError, NodeResult};
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity of the node being executed, used for error attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct NodeIdentity {
    pub name: String,
}

/// One element of the input batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, new)]
pub struct InputItem {
    /// Opaque item body
    #[serde(default)]
    pub json: Value,
    /// Parameter overrides for this item only
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

pub trait ExecutionContext {
    fn input_data(&self) -> &[InputItem];

    /// Raw parameter value for an item, `None` when the host has none
    fn node_parameter(&self, name: &str, item_index: usize) -> Option<&Value>;

    fn node(&self) -> &NodeIdentity;

    fn continue_on_fail(&self) -> bool;

    fn string_parameter(&self, name: &str, item_index: usize, default: &str) -> NodeResult<String> {
        match self.node_parameter(name, item_index) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(NodeError::invalid_parameter(name, "string")),
        }
    }

    fn bool_parameter(&self, name: &str, item_index: usize, default: bool) -> NodeResult<bool> {
        match self.node_parameter(name, item_index) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(value)) => Ok(*value),
            Some(_) => Err(NodeError::invalid_parameter(name, "boolean")),
        }
    }

    /// String parameter that must be present and non-empty
    fn required_string_parameter(&self, name: &str, item_index: usize) -> NodeResult<String> {
        let value = self.string_parameter(name, item_index, "")?;
        if value.is_empty() {
            return Err(NodeError::missing_parameter(name));
        }

        Ok(value)
    }
}

fn single_item() -> Vec<InputItem> {
    vec![InputItem::default()]
}

/// Self-contained context: a batch description as the host would deliver it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchContext {
    pub node: NodeIdentity,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default = "single_item")]
    pub items: Vec<InputItem>,
    #[serde(default)]
    pub continue_on_fail: bool,
}

impl BatchContext {
    /// Single empty item, no parameters, abort on failure
    pub fn new<S: Into<String>>(node_name: S) -> Self {
        Self {
            node: NodeIdentity::new(node_name.into()),
            parameters: Map::new(),
            items: single_item(),
            continue_on_fail: false,
        }
    }

    pub fn with_parameter<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_items(mut self, items: Vec<InputItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }
}

impl ExecutionContext for BatchContext {
    fn input_data(&self) -> &[InputItem] {
        &self.items
    }

    fn node_parameter(&self, name: &str, item_index: usize) -> Option<&Value> {
        self.items
            .get(item_index)
            .and_then(|item| item.parameters.get(name))
            .filter(|value| !value.is_null())
            .or_else(|| self.parameters.get(name))
    }

    fn node(&self) -> &NodeIdentity {
        &self.node
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}
