#![allow(dead_code)]

pub mod command;
pub mod file;

/// Parse the JSON array printed by the binary
pub fn parse_output(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("Output should be valid JSON")
}
