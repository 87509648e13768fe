/*!
 * Process Management
 * Process table, hierarchy, and ready/I/O queue bookkeeping
 */

use super::hierarchy::{self, ProcessTable};
use super::queues::RunQueues;
use super::snapshot::{QueueEntry, StateSnapshot, TreeEntry, TreeView};
use super::stats::ManagerStats;
use super::types::{ParentPolicy, Process, ProcessInfo, QueueLocation};
use crate::core::config::ManagerConfig;
use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::types::{Pid, FIRST_PID};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything guarded by the registry lock
///
/// Queue membership and each record's `location` are only ever changed
/// together while the write lock is held.
#[derive(Debug)]
struct RegistryState {
    processes: ProcessTable,
    queues: RunQueues,
    next_pid: Pid,
    primary_root: Option<Pid>,
    stats: ManagerStats,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            processes: ProcessTable::default(),
            queues: RunQueues::new(),
            next_pid: FIRST_PID,
            primary_root: None,
            stats: ManagerStats::default(),
        }
    }

    fn queue_entries(&self, location: QueueLocation) -> Vec<QueueEntry> {
        self.queues
            .iter(location)
            .filter_map(|pid| {
                self.processes.get(&pid).map(|p| QueueEntry {
                    pid,
                    name: p.name.clone(),
                })
            })
            .collect()
    }

    /// Move a process between queues, keeping its record in step
    fn transfer(&mut self, pid: Pid, from: QueueLocation, to: QueueLocation) -> bool {
        if !self.queues.transfer(pid, from, to) {
            return false;
        }
        if let Some(process) = self.processes.get_mut(&pid) {
            process.location = to;
        }
        true
    }
}

/// Process registry and scheduler queues
///
/// Cheap to clone; clones share the same registry.
#[derive(Clone)]
pub struct ProcessManager {
    state: Arc<RwLock<RegistryState>>,
    parent_policy: ParentPolicy,
}

/// Builder for ProcessManager
#[derive(Debug, Default)]
pub struct ProcessManagerBuilder {
    parent_policy: ParentPolicy,
}

impl ProcessManagerBuilder {
    /// Create a new ProcessManager builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how unknown parent PIDs are handled on creation
    pub fn with_parent_policy(mut self, policy: ParentPolicy) -> Self {
        self.parent_policy = policy;
        self
    }

    /// Build the ProcessManager
    pub fn build(self) -> ProcessManager {
        info!(parent_policy = ?self.parent_policy, "Process manager initialized");
        ProcessManager {
            state: Arc::new(RwLock::new(RegistryState::new())),
            parent_policy: self.parent_policy,
        }
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessManager {
    /// Create a ProcessManager with the permissive parent policy
    pub fn new() -> Self {
        ProcessManagerBuilder::new().build()
    }

    /// Create a builder for constructing a ProcessManager
    pub fn builder() -> ProcessManagerBuilder {
        ProcessManagerBuilder::new()
    }

    pub fn from_config(config: &ManagerConfig) -> Self {
        Self::builder()
            .with_parent_policy(config.parent_policy)
            .build()
    }

    #[inline]
    pub fn parent_policy(&self) -> ParentPolicy {
        self.parent_policy
    }

    /// Create a process and enqueue it at the tail of the ready queue
    ///
    /// An unknown parent makes the process a root under the permissive
    /// policy and fails with `InvalidParent` under the strict one. A root
    /// becomes the primary root if none is recorded yet.
    pub fn create_process(
        &self,
        name: impl Into<String>,
        parent: Option<Pid>,
    ) -> ProcessResult<Pid> {
        let name = name.into();
        let mut state = self.state.write();

        let parent = match parent {
            Some(ppid) if state.processes.contains_key(&ppid) => Some(ppid),
            Some(ppid) => match self.parent_policy {
                ParentPolicy::Permissive => {
                    debug!(pid = ppid, "Parent not found, creating as root");
                    None
                }
                ParentPolicy::Strict => {
                    debug!(pid = ppid, "Rejecting creation with unknown parent");
                    return Err(ProcessError::InvalidParent(ppid));
                }
            },
            None => None,
        };

        // PIDs are never reused, so the last value is never handed out
        let pid = state.next_pid;
        state.next_pid = pid.checked_add(1).ok_or_else(|| {
            warn!(pid, "PID space exhausted");
            ProcessError::PidSpaceExhausted
        })?;

        match parent {
            Some(ppid) => {
                if let Some(p) = state.processes.get_mut(&ppid) {
                    p.add_child(pid);
                }
            }
            None => {
                if state.primary_root.is_none() {
                    state.primary_root = Some(pid);
                }
            }
        }

        state.processes.insert(pid, Process::new(pid, name.clone(), parent));
        state.queues.enqueue(QueueLocation::Ready, pid);
        state.stats.total_created += 1;

        info!(pid, name = %name, parent = ?parent, "Process created");
        Ok(pid)
    }

    /// Push a frame onto a process's call stack
    pub fn call_function(&self, pid: Pid, function: impl Into<String>) -> ProcessResult<()> {
        let function = function.into();
        let mut state = self.state.write();

        let process = state
            .processes
            .get_mut(&pid)
            .ok_or(ProcessError::ProcessNotFound(pid))?;
        process.call_stack.push(function.clone());
        let depth = process.call_stack.len();
        state.stats.function_calls += 1;

        info!(pid, function = %function, depth, "Function called");
        Ok(())
    }

    /// Pop the top frame off a process's call stack
    pub fn return_from_function(&self, pid: Pid) -> ProcessResult<String> {
        let mut state = self.state.write();

        let process = state
            .processes
            .get_mut(&pid)
            .ok_or(ProcessError::ProcessNotFound(pid))?;
        let function = process
            .call_stack
            .pop()
            .ok_or(ProcessError::EmptyCallStack(pid))?;
        let depth = process.call_stack.len();
        state.stats.function_returns += 1;

        info!(pid, function = %function, depth, "Function returned");
        Ok(function)
    }

    /// Move a ready process to the tail of the I/O queue
    pub fn request_io(&self, pid: Pid) -> ProcessResult<()> {
        let mut state = self.state.write();

        if !state.processes.contains_key(&pid) {
            return Err(ProcessError::ProcessNotFound(pid));
        }
        if !state.transfer(pid, QueueLocation::Ready, QueueLocation::Io) {
            debug!(pid, "I/O request rejected, process not ready");
            return Err(ProcessError::NotInReadyQueue(pid));
        }
        state.stats.io_requests += 1;

        info!(pid, "Process moved to I/O queue");
        Ok(())
    }

    /// Move a process waiting on I/O back to the tail of the ready queue
    ///
    /// Only the I/O queue is consulted.
    pub fn complete_io(&self, pid: Pid) -> ProcessResult<()> {
        let mut state = self.state.write();

        if !state.transfer(pid, QueueLocation::Io, QueueLocation::Ready) {
            debug!(pid, "I/O completion rejected, process not waiting");
            return Err(ProcessError::NotInIoQueue(pid));
        }
        state.stats.io_completions += 1;

        info!(pid, "Process completed I/O");
        Ok(())
    }

    /// Remove a process from the queues, the hierarchy, and the registry
    ///
    /// Children are orphaned: they become roots and keep their own subtrees.
    /// Terminating the primary root clears it without electing a successor.
    pub fn terminate_process(&self, pid: Pid) -> ProcessResult<ProcessInfo> {
        let mut state = self.state.write();

        // Captured before detaching so the caller sees the final edges
        let info = state
            .processes
            .get(&pid)
            .map(Process::info)
            .ok_or(ProcessError::ProcessNotFound(pid))?;

        state.queues.remove(info.location, pid);
        let orphans = hierarchy::detach(&mut state.processes, pid);

        if state.primary_root == Some(pid) {
            state.primary_root = None;
            debug!(pid, "Primary root cleared");
        }

        state.processes.remove(&pid);
        state.stats.total_terminated += 1;

        info!(pid, orphans = ?orphans, "Process terminated");
        Ok(info)
    }

    /// Ready queue, I/O queue, and the tree under the primary root
    pub fn show_state(&self) -> StateSnapshot {
        let state = self.state.read();

        let tree = match state.primary_root {
            Some(root) => TreeView::Rooted(hierarchy::preorder(&state.processes, root)),
            None => TreeView::Empty,
        };

        StateSnapshot {
            ready: state.queue_entries(QueueLocation::Ready),
            io: state.queue_entries(QueueLocation::Io),
            tree,
        }
    }

    /// Get process information
    pub fn get_process(&self, pid: Pid) -> Option<ProcessInfo> {
        self.state.read().processes.get(&pid).map(Process::info)
    }

    #[inline]
    pub fn exists(&self, pid: Pid) -> bool {
        self.state.read().processes.contains_key(&pid)
    }

    /// List all live processes, sorted by PID
    pub fn list_processes(&self) -> Vec<ProcessInfo> {
        let state = self.state.read();
        let mut list: Vec<ProcessInfo> = state.processes.values().map(Process::info).collect();
        list.sort_unstable_by_key(|p| p.pid);
        list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.read().processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.read().processes.is_empty()
    }

    /// Which queue a process occupies
    pub fn location(&self, pid: Pid) -> Option<QueueLocation> {
        self.state.read().processes.get(&pid).map(|p| p.location)
    }

    pub fn ready_queue(&self) -> Vec<Pid> {
        self.state.read().queues.pids(QueueLocation::Ready)
    }

    pub fn io_queue(&self) -> Vec<Pid> {
        self.state.read().queues.pids(QueueLocation::Io)
    }

    pub fn primary_root(&self) -> Option<Pid> {
        self.state.read().primary_root
    }

    /// Every hierarchy root, including orphans, in PID order
    pub fn roots(&self) -> Vec<Pid> {
        hierarchy::roots(&self.state.read().processes)
    }

    /// Pre-order walk of every root tree
    pub fn forest(&self) -> Vec<TreeEntry> {
        hierarchy::forest(&self.state.read().processes)
    }

    pub fn stats(&self) -> ManagerStats {
        let state = self.state.read();
        ManagerStats {
            live_processes: state.processes.len(),
            ready_len: state.queues.len(QueueLocation::Ready),
            io_len: state.queues.len(QueueLocation::Io),
            ..state.stats
        }
    }
}
