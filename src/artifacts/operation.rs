use crate::artifacts::error::{NodeError, NodeResult};
use serde::{Deserialize, Serialize};

/// Raw host values accepted for the operation selector
const OPERATION_KEYWORDS: phf::Map<&'static str, Operation> = phf::phf_map! {
    "add" => Operation::Add,
    "checkout" => Operation::Checkout,
    "clone" => Operation::Clone,
    "commit" => Operation::Commit,
    "init" => Operation::Init,
    "log" => Operation::Log,
    "merge" => Operation::Merge,
    "pull" => Operation::Pull,
    "push" => Operation::Push,
    "status" => Operation::Status,
    "switch" => Operation::Switch,
};

/// Version-control action requested by one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Checkout,
    Clone,
    Commit,
    Init,
    Log,
    Merge,
    Pull,
    Push,
    #[default]
    Status,
    Switch,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::Add,
        Operation::Checkout,
        Operation::Clone,
        Operation::Commit,
        Operation::Init,
        Operation::Log,
        Operation::Merge,
        Operation::Pull,
        Operation::Push,
        Operation::Status,
        Operation::Switch,
    ];

    /// Parse the selector exactly as the host supplies it (case-sensitive)
    pub fn try_parse(raw: &str) -> NodeResult<Self> {
        OPERATION_KEYWORDS
            .get(raw)
            .copied()
            .ok_or_else(|| NodeError::unsupported_operation(raw))
    }

    /// Subcommand keyword passed to git
    pub fn keyword(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Checkout => "checkout",
            Operation::Clone => "clone",
            Operation::Commit => "commit",
            Operation::Init => "init",
            Operation::Log => "log",
            Operation::Merge => "merge",
            Operation::Pull => "pull",
            Operation::Push => "push",
            Operation::Status => "status",
            Operation::Switch => "switch",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl std::str::FromStr for Operation {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}
