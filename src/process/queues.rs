/*!
 * Scheduling Queues
 * FIFO ready and I/O-wait queues holding PIDs
 */

use super::types::QueueLocation;
use crate::core::types::Pid;
use std::collections::VecDeque;

/// The ready queue and the I/O queue
///
/// Entries are PIDs only; the registry owns the process records.
#[derive(Debug, Default, Clone)]
pub struct RunQueues {
    ready: VecDeque<Pid>,
    io: VecDeque<Pid>,
}

impl RunQueues {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn queue(&self, location: QueueLocation) -> &VecDeque<Pid> {
        match location {
            QueueLocation::Ready => &self.ready,
            QueueLocation::Io => &self.io,
        }
    }

    #[inline]
    fn queue_mut(&mut self, location: QueueLocation) -> &mut VecDeque<Pid> {
        match location {
            QueueLocation::Ready => &mut self.ready,
            QueueLocation::Io => &mut self.io,
        }
    }

    /// Append to the tail of a queue
    #[inline]
    pub fn enqueue(&mut self, location: QueueLocation, pid: Pid) {
        self.queue_mut(location).push_back(pid);
    }

    /// Remove a PID from a queue - O(n) scan, order of the rest preserved
    pub fn remove(&mut self, location: QueueLocation, pid: Pid) -> bool {
        let queue = self.queue_mut(location);
        match queue.iter().position(|&p| p == pid) {
            Some(pos) => {
                queue.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move a PID from one queue to the tail of another
    ///
    /// Returns false and changes nothing if the PID is not in `from`.
    pub fn transfer(&mut self, pid: Pid, from: QueueLocation, to: QueueLocation) -> bool {
        if !self.remove(from, pid) {
            return false;
        }
        self.enqueue(to, pid);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, location: QueueLocation, pid: Pid) -> bool {
        self.queue(location).contains(&pid)
    }

    /// Snapshot of a queue in FIFO order
    #[must_use]
    pub fn pids(&self, location: QueueLocation) -> Vec<Pid> {
        self.queue(location).iter().copied().collect()
    }

    #[inline]
    pub fn iter(&self, location: QueueLocation) -> impl Iterator<Item = Pid> + '_ {
        self.queue(location).iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self, location: QueueLocation) -> usize {
        self.queue(location).len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.io.is_empty()
    }
}
