/*!
 * Console Rendering
 * Human-readable text for registry results
 */

use crate::core::errors::ProcessError;
use crate::process::snapshot::{QueueEntry, StateSnapshot, TreeView};
use std::fmt::Write;

const INDENT: &str = "  ";

pub const NOT_FOUND: &str = "Process not found.";
pub const NOT_IN_IO_QUEUE: &str = "Process not found in I/O queue.";

/// One-line message for a failed operation
pub fn error_line(err: &ProcessError) -> String {
    match err {
        ProcessError::ProcessNotFound(_) => NOT_FOUND.to_string(),
        ProcessError::NotInReadyQueue(_) => "Process not in ready queue.".to_string(),
        ProcessError::NotInIoQueue(_) => NOT_IN_IO_QUEUE.to_string(),
        ProcessError::InvalidParent(ppid) => format!("Parent process {} not found.", ppid),
        ProcessError::EmptyCallStack(pid) => {
            format!("Process {} has no function to return from.", pid)
        }
        ProcessError::PidSpaceExhausted => "No PIDs left to assign.".to_string(),
    }
}

fn push_queue(out: &mut String, title: &str, entries: &[QueueEntry]) {
    let _ = writeln!(out, "\n--- {} ---", title);
    for entry in entries {
        let _ = writeln!(out, "PID: {}, Name: {}", entry.pid, entry.name);
    }
}

/// Full `show_state` rendering
pub fn snapshot(state: &StateSnapshot) -> String {
    let mut out = String::new();

    push_queue(&mut out, "Ready Queue", &state.ready);
    push_queue(&mut out, "I/O Queue", &state.io);

    out.push_str("\n--- Process Tree ---\n");
    match &state.tree {
        TreeView::Empty => out.push_str("(No processes created yet)\n"),
        TreeView::Rooted(entries) => {
            for entry in entries {
                let _ = writeln!(
                    out,
                    "{}PID: {}, Name: {}",
                    INDENT.repeat(entry.depth),
                    entry.pid,
                    entry.name
                );
            }
        }
    }
    out.push_str("--------------------\n");

    out
}
