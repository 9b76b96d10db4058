//! Data types shared by the nodes
//!
//! - `error`: per-item and batch-level errors
//! - `invocation`: git argument vectors and their display form
//! - `operation`: the closed set of git operations
//! - `record`: output records and item envelopes
//! - `request`: typed git request resolved from item parameters

pub mod error;
pub mod invocation;
pub mod operation;
pub mod record;
pub mod request;
