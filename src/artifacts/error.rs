//! Node error types
//!
//! Two layers of errors exist:
//!
//! - [`NodeError`]: what went wrong while processing one item (bad parameter,
//!   unsupported operation, failing `git` process)
//! - [`NodeOperationError`]: the batch-level error, a [`NodeError`] tagged with
//!   the node that raised it and the position of the offending item

use thiserror::Error;

/// Result type for a single item's processing
pub type NodeResult<T> = Result<T, NodeError>;

/// Failure while processing a single item
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NodeError {
    /// Operation selector outside the supported set
    #[error("Unsupported operation {operation}")]
    UnsupportedOperation { operation: String },

    /// Required parameter absent or empty
    #[error("Missing required parameter '{name}'")]
    MissingParameter { name: String },

    /// Parameter present but of the wrong type
    #[error("Parameter '{name}' must be a {expected}")]
    InvalidParameter { name: String, expected: &'static str },

    /// Value that git would parse as an option instead of a name
    #[error("Parameter '{name}' must not start with '-': {value}")]
    OptionLikeValue { name: String, value: String },

    /// External process exited with a non-zero status
    #[error("Command failed: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// External process could not be started
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl NodeError {
    pub fn unsupported_operation<S: Into<String>>(operation: S) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    pub fn missing_parameter<S: Into<String>>(name: S) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, expected: &'static str) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            expected,
        }
    }

    pub fn option_like_value<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self::OptionLikeValue {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A per-item failure that aborted the batch
#[derive(Debug, Error)]
#[error("{source} [node '{node}', item {item_index}]")]
pub struct NodeOperationError {
    /// Name of the node that raised the error
    pub node: String,
    /// Position of the failing item in the input batch
    pub item_index: usize,
    #[source]
    pub source: NodeError,
}

impl NodeOperationError {
    pub fn new<S: Into<String>>(node: S, item_index: usize, source: NodeError) -> Self {
        Self {
            node: node.into(),
            item_index,
            source,
        }
    }

    /// Message of the underlying failure, without the node/item suffix
    pub fn message(&self) -> String {
        self.source.to_string()
    }
}
