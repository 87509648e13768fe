/*!
 * OS Process Manager Library
 * Simulated process table, hierarchy, and ready/I/O queues
 */

pub mod console;
pub mod core;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::{ManagerConfig, Pid, ProcessError, ProcessResult};
pub use console::Console;
pub use monitoring::init_tracing;
pub use process::{
    ParentPolicy, ProcessInfo, ProcessManager, QueueLocation, StateSnapshot, TreeEntry, TreeView,
};
