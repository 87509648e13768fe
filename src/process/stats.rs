/*!
 * Registry Statistics
 */

use crate::core::serde::{is_zero_u64, is_zero_usize};
use serde::{Deserialize, Serialize};

/// Counters maintained by the process manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ManagerStats {
    #[serde(skip_serializing_if = "is_zero_usize", default)]
    pub live_processes: usize,
    #[serde(skip_serializing_if = "is_zero_usize", default)]
    pub ready_len: usize,
    #[serde(skip_serializing_if = "is_zero_usize", default)]
    pub io_len: usize,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub total_created: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub total_terminated: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub io_requests: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub io_completions: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub function_calls: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub function_returns: u64,
}
