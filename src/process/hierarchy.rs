/*!
 * Process Hierarchy
 * Parent/child forest walks over the process table
 */

use super::snapshot::TreeEntry;
use super::types::Process;
use crate::core::types::Pid;
use ahash::AHashMap;

/// Process table keyed by PID
pub type ProcessTable = AHashMap<Pid, Process>;

/// Pre-order walk of the tree under `root`, children in creation order
///
/// Iterative so deep chains cannot overflow the stack. Child PIDs that do
/// not resolve are skipped.
#[must_use]
pub fn preorder(table: &ProcessTable, root: Pid) -> Vec<TreeEntry> {
    let mut out = Vec::new();
    let mut stack: Vec<(Pid, usize)> = vec![(root, 0)];

    while let Some((pid, depth)) = stack.pop() {
        let Some(process) = table.get(&pid) else {
            continue;
        };
        out.push(TreeEntry {
            pid,
            name: process.name.clone(),
            depth,
        });
        for &child in process.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    out
}

/// All hierarchy roots in PID order
#[must_use]
pub fn roots(table: &ProcessTable) -> Vec<Pid> {
    let mut roots: Vec<Pid> = table
        .values()
        .filter(|p| p.is_root())
        .map(|p| p.pid)
        .collect();
    roots.sort_unstable();
    roots
}

/// Pre-order walk of every root tree, roots in PID order
#[must_use]
pub fn forest(table: &ProcessTable) -> Vec<TreeEntry> {
    roots(table)
        .into_iter()
        .flat_map(|root| preorder(table, root))
        .collect()
}

/// Unlink `pid` from the hierarchy
///
/// Removes it from its parent's children and turns each of its children into
/// a root. Returns the orphaned PIDs. The record itself stays in the table.
pub fn detach(table: &mut ProcessTable, pid: Pid) -> Vec<Pid> {
    let (parent, children) = match table.get_mut(&pid) {
        Some(process) => (process.parent.take(), std::mem::take(&mut process.children)),
        None => return Vec::new(),
    };

    if let Some(parent_pid) = parent {
        if let Some(parent) = table.get_mut(&parent_pid) {
            parent.remove_child(pid);
        }
    }

    for &child in &children {
        if let Some(child) = table.get_mut(&child) {
            child.parent = None;
        }
    }

    children
}
