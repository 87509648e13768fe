/*!
 * State Snapshots
 * Read-only views of the queues and hierarchy for rendering
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};

/// One queue slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueueEntry {
    pub pid: Pid,
    pub name: String,
}

/// One node of a pre-order hierarchy walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TreeEntry {
    pub pid: Pid,
    pub name: String,
    pub depth: usize,
}

/// Hierarchy view rooted at the primary root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "nodes", rename_all = "snake_case")]
pub enum TreeView {
    /// No primary root is recorded
    Empty,
    Rooted(Vec<TreeEntry>),
}

impl TreeView {
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[TreeEntry] {
        match self {
            Self::Empty => &[],
            Self::Rooted(entries) => entries,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Everything `show_state` reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StateSnapshot {
    pub ready: Vec<QueueEntry>,
    pub io: Vec<QueueEntry>,
    pub tree: TreeView,
}

impl StateSnapshot {
    #[must_use]
    pub fn ready_pids(&self) -> Vec<Pid> {
        self.ready.iter().map(|e| e.pid).collect()
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
