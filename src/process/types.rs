/*!
 * Process Types
 * Common types for process management
 */

use crate::core::serde::{is_empty_vec, is_none};
use crate::core::types::Pid;
use serde::{Deserialize, Serialize};

/// Which scheduling queue a live process occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueLocation {
    /// Eligible to run next
    Ready,
    /// Blocked awaiting I/O completion
    Io,
}

/// What to do when a new process names a parent that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentPolicy {
    /// Create the process as a root
    #[default]
    Permissive,
    /// Reject the creation with `InvalidParent`
    Strict,
}

/// Process record owned by the registry
///
/// Hierarchy edges are stored as PIDs and resolved through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub name: String,
    pub parent: Option<Pid>,
    pub children: Vec<Pid>,
    pub call_stack: Vec<String>,
    pub location: QueueLocation,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(pid: Pid, name: String, parent: Option<Pid>) -> Self {
        Self {
            pid,
            name,
            parent,
            children: Vec::new(),
            call_stack: Vec::new(),
            location: QueueLocation::Ready,
        }
    }

    #[inline]
    pub fn add_child(&mut self, child: Pid) {
        self.children.push(child);
    }

    /// Drop a child edge, keeping the order of the remaining children
    #[inline]
    pub fn remove_child(&mut self, child: Pid) -> bool {
        let before = self.children.len();
        self.children.retain(|&c| c != child);
        self.children.len() != before
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn info(&self) -> ProcessInfo {
        ProcessInfo {
            pid: self.pid,
            name: self.name.clone(),
            parent: self.parent,
            children: self.children.clone(),
            call_stack: self.call_stack.clone(),
            location: self.location,
        }
    }
}

/// Read-only copy of a process handed out to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessInfo {
    pub pid: Pid,
    pub name: String,
    #[serde(skip_serializing_if = "is_none", default)]
    pub parent: Option<Pid>,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub children: Vec<Pid>,
    #[serde(skip_serializing_if = "is_empty_vec", default)]
    pub call_stack: Vec<String>,
    pub location: QueueLocation,
}

impl ProcessInfo {
    /// Most recent call-stack frame
    #[inline]
    #[must_use]
    pub fn current_function(&self) -> Option<&str> {
        self.call_stack.last().map(String::as_str)
    }

    #[inline(always)]
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.call_stack.len()
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.location, QueueLocation::Ready)
    }
}
