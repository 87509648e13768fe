/*!
 * Core Types
 * Common types used across the process manager
 */

/// Process ID type
pub type Pid = u32;

/// PID as entered at the console, before range checking
pub type RawPid = i64;

/// Sentinel for "no parent" at the console boundary
pub const NO_PARENT: RawPid = -1;

/// First PID handed out by a fresh registry
pub const FIRST_PID: Pid = 1;

/// Convert a console PID into a registry PID
///
/// Negative values and values outside the PID range have no registry
/// counterpart; for a parent PID that means "no parent".
#[inline]
#[must_use]
pub fn pid_from_raw(raw: RawPid) -> Option<Pid> {
    if raw < 0 {
        return None;
    }
    Pid::try_from(raw).ok()
}
