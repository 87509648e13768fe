/*!
 * OS Process Manager - Console Entry Point
 *
 * Interactive menu over the simulated process registry:
 * - Process creation and termination
 * - Call stack push/pop
 * - Ready/I/O queue transitions
 */

use miette::{IntoDiagnostic, Result};
use std::io;
use tracing::info;

use os_process_manager::console::Console;
use os_process_manager::monitoring::{generate_session_id, span_session};
use os_process_manager::{init_tracing, ManagerConfig, ProcessManager};

fn main() -> Result<()> {
    let config = ManagerConfig::from_env()?;

    init_tracing(config.trace_json);

    let session_id = generate_session_id();
    let session = span_session(&session_id);
    let _entered = session.enter();

    let manager = ProcessManager::from_config(&config);

    info!(parent_policy = ?manager.parent_policy(), "Process manager console starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&manager, stdin.lock(), stdout.lock());
    console.run().into_diagnostic()?;

    let stats = manager.stats();
    info!(
        live = stats.live_processes,
        created = stats.total_created,
        terminated = stats.total_terminated,
        "Console session ended"
    );

    Ok(())
}
