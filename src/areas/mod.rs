//! Runtime components
//!
//! - `context`: host execution context and parameter lookup
//! - `executor`: ordered per-item execution and failure policy
//! - `process`: spawning the git binary

pub mod context;
pub mod executor;
pub mod process;
