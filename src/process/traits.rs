/*!
 * Process Traits
 * Process management abstractions
 */

use super::manager::ProcessManager;
use super::snapshot::StateSnapshot;
use super::types::ProcessInfo;
use crate::core::errors::ProcessResult;
use crate::core::types::Pid;

/// Process lifecycle management
pub trait ProcessLifecycle: Send + Sync {
    /// Create a new process, optionally under a parent
    fn create(&self, name: &str, parent: Option<Pid>) -> ProcessResult<Pid>;

    /// Terminate a process
    fn terminate(&self, pid: Pid) -> ProcessResult<ProcessInfo>;

    /// Check if a process exists
    fn exists(&self, pid: Pid) -> bool;

    /// Get process information
    fn get_process(&self, pid: Pid) -> Option<ProcessInfo>;

    /// List all processes
    fn list_processes(&self) -> Vec<ProcessInfo>;
}

/// Per-process call stack
pub trait CallStack: Send + Sync {
    fn call(&self, pid: Pid, function: &str) -> ProcessResult<()>;

    fn ret(&self, pid: Pid) -> ProcessResult<String>;
}

/// Ready/I/O queue transitions
pub trait IoScheduling: Send + Sync {
    /// Ready queue -> I/O queue
    fn request_io(&self, pid: Pid) -> ProcessResult<()>;

    /// I/O queue -> ready queue
    fn complete_io(&self, pid: Pid) -> ProcessResult<()>;
}

/// Read-only state queries
pub trait StateInspector: Send + Sync {
    fn snapshot(&self) -> StateSnapshot;
}

/// Everything the console needs from a registry
pub trait ProcessRegistry: ProcessLifecycle + CallStack + IoScheduling + StateInspector {}

impl<T> ProcessRegistry for T where
    T: ProcessLifecycle + CallStack + IoScheduling + StateInspector
{
}

impl ProcessLifecycle for ProcessManager {
    fn create(&self, name: &str, parent: Option<Pid>) -> ProcessResult<Pid> {
        self.create_process(name, parent)
    }

    fn terminate(&self, pid: Pid) -> ProcessResult<ProcessInfo> {
        self.terminate_process(pid)
    }

    fn exists(&self, pid: Pid) -> bool {
        ProcessManager::exists(self, pid)
    }

    fn get_process(&self, pid: Pid) -> Option<ProcessInfo> {
        ProcessManager::get_process(self, pid)
    }

    fn list_processes(&self) -> Vec<ProcessInfo> {
        ProcessManager::list_processes(self)
    }
}

impl CallStack for ProcessManager {
    fn call(&self, pid: Pid, function: &str) -> ProcessResult<()> {
        self.call_function(pid, function)
    }

    fn ret(&self, pid: Pid) -> ProcessResult<String> {
        self.return_from_function(pid)
    }
}

impl IoScheduling for ProcessManager {
    fn request_io(&self, pid: Pid) -> ProcessResult<()> {
        ProcessManager::request_io(self, pid)
    }

    fn complete_io(&self, pid: Pid) -> ProcessResult<()> {
        ProcessManager::complete_io(self, pid)
    }
}

impl StateInspector for ProcessManager {
    fn snapshot(&self) -> StateSnapshot {
        self.show_state()
    }
}
