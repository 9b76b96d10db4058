use derive_new::new;
use serde::{Deserialize, Serialize};

/// Structured payload produced for one input item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputRecord {
    Greeting { greeting: String },
    Process { stdout: String, stderr: String },
    Error { error: String },
}

impl OutputRecord {
    pub fn greeting<S: Into<String>>(greeting: S) -> Self {
        Self::Greeting {
            greeting: greeting.into(),
        }
    }

    pub fn process<S: Into<String>>(stdout: S, stderr: S) -> Self {
        Self::Process {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn error<S: Into<String>>(error: S) -> Self {
        Self::Error {
            error: error.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, OutputRecord::Error { .. })
    }
}

/// Host item envelope: the record plus, for failures, the originating index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct OutputItem {
    pub json: OutputRecord,
    #[serde(rename = "pairedItem", skip_serializing_if = "Option::is_none", default)]
    pub paired_item: Option<usize>,
}

impl OutputItem {
    pub fn success(record: OutputRecord) -> Self {
        Self::new(record, None)
    }

    pub fn failure<S: Into<String>>(message: S, item_index: usize) -> Self {
        Self::new(OutputRecord::error(message), Some(item_index))
    }
}
