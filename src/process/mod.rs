/*!
 * Process Module
 * Process registry, hierarchy, and scheduling queues
 */

pub mod hierarchy;
pub mod manager;
pub mod queues;
pub mod snapshot;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use manager::{ProcessManager, ProcessManagerBuilder};
pub use queues::RunQueues;
pub use snapshot::{QueueEntry, StateSnapshot, TreeEntry, TreeView};
pub use stats::ManagerStats;
pub use traits::{CallStack, IoScheduling, ProcessLifecycle, ProcessRegistry, StateInspector};
pub use types::{ParentPolicy, Process, ProcessInfo, QueueLocation};
