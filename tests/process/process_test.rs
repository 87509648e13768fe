/*!
 * Process Manager Tests
 * Tests for process creation, call stacks, queue transitions, and termination
 */

use os_process_manager::process::QueueEntry;
use os_process_manager::{ParentPolicy, ProcessError, ProcessManager, QueueLocation, TreeView};
use pretty_assertions::assert_eq;

#[test]
fn test_process_creation() {
    let pm = ProcessManager::new();
    let pid = pm.create_process("init", None).unwrap();

    assert_eq!(pid, 1);
    assert_eq!(pm.primary_root(), Some(1));

    let process = pm.get_process(pid).unwrap();
    assert_eq!(process.name, "init");
    assert_eq!(process.parent, None);
    assert!(process.is_ready());
    assert_eq!(pm.ready_queue(), vec![1]);
}

#[test]
fn test_multiple_process_creation() {
    let pm = ProcessManager::new();

    let pid1 = pm.create_process("app1", None).unwrap();
    let pid2 = pm.create_process("app2", Some(pid1)).unwrap();
    let pid3 = pm.create_process("app3", Some(pid1)).unwrap();

    assert_eq!((pid1, pid2, pid3), (1, 2, 3));
    assert_eq!(pm.len(), 3);
    assert_eq!(pm.ready_queue(), vec![1, 2, 3]);
    assert_eq!(pm.get_process(1).unwrap().children, vec![2, 3]);
    assert_eq!(pm.get_process(3).unwrap().parent, Some(1));
}

#[test]
fn test_second_root_is_not_primary() {
    let pm = ProcessManager::new();
    pm.create_process("first", None).unwrap();
    let second = pm.create_process("second", None).unwrap();

    assert_eq!(pm.primary_root(), Some(1));
    assert_eq!(pm.roots(), vec![1, second]);
}

#[test]
fn test_unknown_parent_creates_root() {
    let pm = ProcessManager::new();
    let pid = pm.create_process("loner", Some(77)).unwrap();

    let process = pm.get_process(pid).unwrap();
    assert_eq!(process.parent, None);
    assert_eq!(pm.primary_root(), Some(pid));
}

#[test]
fn test_strict_parent_policy_rejects_unknown_parent() {
    let pm = ProcessManager::builder()
        .with_parent_policy(ParentPolicy::Strict)
        .build();

    assert_eq!(
        pm.create_process("loner", Some(77)),
        Err(ProcessError::InvalidParent(77))
    );
    assert!(pm.is_empty());
    assert!(pm.ready_queue().is_empty());
    assert_eq!(pm.primary_root(), None);

    let root = pm.create_process("root", None).unwrap();
    assert_eq!(pm.create_process("child", Some(root)), Ok(2));
}

#[test]
fn test_call_stack_is_lifo() {
    let pm = ProcessManager::new();
    let pid = pm.create_process("app", None).unwrap();

    pm.call_function(pid, "main").unwrap();
    pm.call_function(pid, "parse").unwrap();
    pm.call_function(pid, "lex").unwrap();

    let process = pm.get_process(pid).unwrap();
    assert_eq!(process.call_stack, vec!["main", "parse", "lex"]);
    assert_eq!(process.current_function(), Some("lex"));

    assert_eq!(pm.return_from_function(pid).unwrap(), "lex");
    assert_eq!(pm.return_from_function(pid).unwrap(), "parse");
    assert_eq!(pm.get_process(pid).unwrap().stack_depth(), 1);
}

#[test]
fn test_return_from_empty_stack() {
    let pm = ProcessManager::new();
    let pid = pm.create_process("app", None).unwrap();

    assert_eq!(
        pm.return_from_function(pid),
        Err(ProcessError::EmptyCallStack(pid))
    );
    assert_eq!(
        pm.return_from_function(9999),
        Err(ProcessError::ProcessNotFound(9999))
    );
}

#[test]
fn test_call_function_does_not_move_queues() {
    let pm = ProcessManager::new();
    let a = pm.create_process("a", None).unwrap();
    let b = pm.create_process("b", None).unwrap();

    pm.call_function(a, "work").unwrap();
    assert_eq!(pm.ready_queue(), vec![a, b]);
}

#[test]
fn test_request_io_preserves_order() {
    let pm = ProcessManager::new();
    for name in ["a", "b", "c", "d"] {
        pm.create_process(name, None).unwrap();
    }

    pm.request_io(2).unwrap();
    pm.request_io(4).unwrap();

    assert_eq!(pm.ready_queue(), vec![1, 3]);
    assert_eq!(pm.io_queue(), vec![2, 4]);
    assert_eq!(pm.location(2), Some(QueueLocation::Io));
}

#[test]
fn test_request_io_twice() {
    let pm = ProcessManager::new();
    let pid = pm.create_process("a", None).unwrap();

    pm.request_io(pid).unwrap();
    assert_eq!(pm.request_io(pid), Err(ProcessError::NotInReadyQueue(pid)));
    assert_eq!(pm.io_queue(), vec![pid]);
}

#[test]
fn test_complete_io_goes_to_tail() {
    let pm = ProcessManager::new();
    let a = pm.create_process("a", None).unwrap();
    let b = pm.create_process("b", None).unwrap();
    let c = pm.create_process("c", None).unwrap();

    pm.request_io(a).unwrap();
    pm.complete_io(a).unwrap();

    assert_eq!(pm.ready_queue(), vec![b, c, a]);
    assert!(pm.io_queue().is_empty());
}

#[test]
fn test_complete_io_when_ready() {
    let pm = ProcessManager::new();
    let pid = pm.create_process("a", None).unwrap();

    assert_eq!(pm.complete_io(pid), Err(ProcessError::NotInIoQueue(pid)));
    assert_eq!(pm.ready_queue(), vec![pid]);
}

#[test]
fn test_complete_io_unknown_pid() {
    let pm = ProcessManager::new();
    assert_eq!(pm.complete_io(5), Err(ProcessError::NotInIoQueue(5)));
}

#[test]
fn test_process_termination() {
    let pm = ProcessManager::new();
    let pid = pm.create_process("app", None).unwrap();
    pm.call_function(pid, "main").unwrap();

    let last = pm.terminate_process(pid).unwrap();
    assert_eq!(last.pid, pid);
    assert_eq!(last.call_stack, vec!["main"]);

    assert!(pm.get_process(pid).is_none());
    assert!(pm.ready_queue().is_empty());
    assert_eq!(pm.primary_root(), None);
    assert_eq!(pm.show_state().tree, TreeView::Empty);
}

#[test]
fn test_termination_reports_final_edges() {
    let pm = ProcessManager::new();
    let root = pm.create_process("init", None).unwrap();
    let mid = pm.create_process("shell", Some(root)).unwrap();
    let leaf = pm.create_process("job", Some(mid)).unwrap();

    let last = pm.terminate_process(mid).unwrap();
    assert_eq!(last.pid, mid);
    assert_eq!(last.parent, Some(root));
    assert_eq!(last.children, vec![leaf]);

    assert!(pm.get_process(root).unwrap().children.is_empty());
    assert_eq!(pm.get_process(leaf).unwrap().parent, None);
}

#[test]
fn test_terminate_waiting_process() {
    let pm = ProcessManager::new();
    let a = pm.create_process("a", None).unwrap();
    let b = pm.create_process("b", None).unwrap();
    pm.request_io(b).unwrap();

    pm.terminate_process(b).unwrap();
    assert!(pm.io_queue().is_empty());
    assert_eq!(pm.ready_queue(), vec![a]);
    assert_eq!(pm.complete_io(b), Err(ProcessError::NotInIoQueue(b)));
}

#[test]
fn test_terminate_nonexistent_process() {
    let pm = ProcessManager::new();
    assert_eq!(
        pm.terminate_process(999),
        Err(ProcessError::ProcessNotFound(999))
    );
}

#[test]
fn test_terminate_child_prunes_parent() {
    let pm = ProcessManager::new();
    let root = pm.create_process("root", None).unwrap();
    let a = pm.create_process("a", Some(root)).unwrap();
    let b = pm.create_process("b", Some(root)).unwrap();
    let c = pm.create_process("c", Some(root)).unwrap();

    pm.terminate_process(b).unwrap();
    assert_eq!(pm.get_process(root).unwrap().children, vec![a, c]);
}

#[test]
fn test_terminate_orphans_children() {
    let pm = ProcessManager::new();
    let root = pm.create_process("root", None).unwrap();
    let mid = pm.create_process("mid", Some(root)).unwrap();
    let leaf1 = pm.create_process("leaf1", Some(mid)).unwrap();
    let leaf2 = pm.create_process("leaf2", Some(mid)).unwrap();
    let grandchild = pm.create_process("grandchild", Some(leaf1)).unwrap();

    pm.terminate_process(mid).unwrap();

    assert!(pm.get_process(root).unwrap().children.is_empty());
    let l1 = pm.get_process(leaf1).unwrap();
    assert_eq!(l1.parent, None);
    assert_eq!(l1.children, vec![grandchild]);
    assert_eq!(pm.get_process(leaf2).unwrap().parent, None);
    assert_eq!(pm.get_process(grandchild).unwrap().parent, Some(leaf1));

    // Orphans leave the primary-root tree but stay live and queued
    let names: Vec<String> = pm
        .show_state()
        .tree
        .entries()
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names, vec!["root"]);
    assert_eq!(pm.roots(), vec![root, leaf1, leaf2]);
    assert_eq!(pm.ready_queue(), vec![root, leaf1, leaf2, grandchild]);
}

#[test]
fn test_pids_never_reused() {
    let pm = ProcessManager::new();
    let a = pm.create_process("a", None).unwrap();
    pm.terminate_process(a).unwrap();
    let b = pm.create_process("b", None).unwrap();

    assert_eq!(b, 2);
    // Primary root is not re-elected by termination, but a fresh root claims it
    assert_eq!(pm.primary_root(), Some(b));
}

#[test]
fn test_not_found_leaves_state_unchanged() {
    let pm = ProcessManager::new();
    let root = pm.create_process("root", None).unwrap();
    pm.create_process("child", Some(root)).unwrap();
    pm.request_io(2).unwrap();

    let before = pm.show_state();
    let listing = pm.list_processes();

    assert_eq!(
        pm.call_function(9999, "f"),
        Err(ProcessError::ProcessNotFound(9999))
    );
    assert_eq!(pm.request_io(9999), Err(ProcessError::ProcessNotFound(9999)));
    assert_eq!(
        pm.terminate_process(9999),
        Err(ProcessError::ProcessNotFound(9999))
    );

    assert_eq!(pm.show_state(), before);
    assert_eq!(pm.list_processes(), listing);
}

#[test]
fn test_reference_scenario() {
    let pm = ProcessManager::new();

    let p1 = pm.create_process("P1", None).unwrap();
    assert_eq!(p1, 1);
    assert_eq!(pm.primary_root(), Some(1));

    let p2 = pm.create_process("P2", Some(1)).unwrap();
    assert_eq!(p2, 2);
    assert_eq!(pm.get_process(2).unwrap().parent, Some(1));
    assert_eq!(pm.ready_queue(), vec![1, 2]);

    pm.request_io(2).unwrap();
    assert_eq!(pm.ready_queue(), vec![1]);
    assert_eq!(pm.io_queue(), vec![2]);

    pm.complete_io(2).unwrap();
    assert_eq!(pm.ready_queue(), vec![1, 2]);
    assert!(pm.io_queue().is_empty());

    pm.terminate_process(1).unwrap();
    assert!(!pm.exists(1));
    assert_eq!(pm.primary_root(), None);
    assert!(pm.exists(2));
    assert_eq!(pm.get_process(2).unwrap().parent, None);

    let state = pm.show_state();
    assert_eq!(
        state.ready,
        vec![QueueEntry {
            pid: 2,
            name: "P2".to_string()
        }]
    );
    assert!(state.tree.is_empty());
}

#[test]
fn test_request_io_on_missing_pid_scenario() {
    let pm = ProcessManager::new();
    pm.create_process("P1", None).unwrap();

    assert_eq!(pm.request_io(5), Err(ProcessError::ProcessNotFound(5)));
    assert_eq!(pm.ready_queue(), vec![1]);
    assert!(pm.io_queue().is_empty());
}

#[test]
fn test_stats_counters() {
    let pm = ProcessManager::new();
    let a = pm.create_process("a", None).unwrap();
    let b = pm.create_process("b", Some(a)).unwrap();
    pm.call_function(a, "f").unwrap();
    pm.return_from_function(a).unwrap();
    pm.request_io(b).unwrap();
    pm.complete_io(b).unwrap();
    pm.request_io(b).unwrap();
    pm.terminate_process(a).unwrap();

    let stats = pm.stats();
    assert_eq!(stats.live_processes, 1);
    assert_eq!(stats.ready_len, 0);
    assert_eq!(stats.io_len, 1);
    assert_eq!(stats.total_created, 2);
    assert_eq!(stats.total_terminated, 1);
    assert_eq!(stats.io_requests, 2);
    assert_eq!(stats.io_completions, 1);
    assert_eq!(stats.function_calls, 1);
    assert_eq!(stats.function_returns, 1);
}

#[test]
fn test_concurrent_process_creation() {
    use std::sync::Arc;
    use std::thread;

    let pm = Arc::new(ProcessManager::new());
    let mut handles = vec![];

    for i in 0..10 {
        let pm_clone: Arc<ProcessManager> = Arc::clone(&pm);
        handles.push(thread::spawn(move || {
            pm_clone.create_process(format!("app-{}", i), None).unwrap()
        }));
    }

    let mut pids: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    pids.sort_unstable();

    assert_eq!(pids, (1..=10).collect::<Vec<u32>>());
    assert_eq!(pm.ready_queue().len(), 10);
}
