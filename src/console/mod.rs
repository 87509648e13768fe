/*!
 * Interactive Console
 * Menu loop that drives a process registry and prints the outcome
 */

pub mod menu;
pub mod render;

pub use menu::{MenuChoice, TokenReader};

use crate::core::errors::ProcessResult;
use crate::core::types::{pid_from_raw, Pid, RawPid};
use crate::monitoring::CommandSpan;
use crate::process::ProcessRegistry;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console session over any reader/writer pair
pub struct Console<'a, M, R, W> {
    registry: &'a M,
    input: TokenReader<R>,
    output: W,
}

impl<'a, M, R, W> Console<'a, M, R, W>
where
    M: ProcessRegistry,
    R: BufRead,
    W: Write,
{
    pub fn new(registry: &'a M, input: R, output: W) -> Self {
        Self {
            registry,
            input: TokenReader::new(input),
            output,
        }
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(menu::MENU.as_bytes())?;
            let Some(token) = self.prompt("Enter choice: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&token) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.output.flush()
    }

    /// Consume the console and hand back the writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.input.next_token()
    }

    /// Prompt for an integer; `Ok(None)` on end of input or a bad number
    fn prompt_number<T: std::str::FromStr>(&mut self, text: &str) -> io::Result<Option<T>> {
        let Some(token) = self.prompt(text)? else {
            return Ok(None);
        };
        match token.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid number.")?;
                Ok(None)
            }
        }
    }

    fn prompt_pid(&mut self) -> io::Result<Option<RawPid>> {
        self.prompt_number::<RawPid>("Enter PID: ")
    }

    /// Map a typed PID onto the registry range
    ///
    /// Values no process can have are reported with `miss`, the same line
    /// the registry's own failure for that command would produce.
    fn resolve_pid(
        &mut self,
        span: &CommandSpan,
        raw: RawPid,
        miss: &'static str,
    ) -> io::Result<Option<Pid>> {
        match pid_from_raw(raw) {
            Some(pid) => {
                span.record_pid(pid);
                Ok(Some(pid))
            }
            None => {
                span.record_error(miss);
                warn!(pid = raw, "Command failed, PID out of range");
                writeln!(self.output, "{}", miss)?;
                Ok(None)
            }
        }
    }

    /// Prompt for a target PID and resolve it in one step
    fn prompt_target(
        &mut self,
        span: &CommandSpan,
        miss: &'static str,
    ) -> io::Result<Option<Pid>> {
        match self.prompt_pid()? {
            Some(raw) => self.resolve_pid(span, raw, miss),
            None => Ok(None),
        }
    }

    fn report<T>(
        &mut self,
        span: &CommandSpan,
        result: ProcessResult<T>,
        success: impl FnOnce(T) -> String,
    ) -> io::Result<()> {
        match result {
            Ok(value) => {
                span.record_result(true);
                writeln!(self.output, "{}", success(value))
            }
            Err(err) => {
                span.record_error(&err.to_string());
                warn!(error = %err, "Command failed");
                writeln!(self.output, "{}", render::error_line(&err))
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        let span = CommandSpan::new(choice.name());
        let _entered = span.enter();

        match choice {
            MenuChoice::CreateProcess => {
                let Some(name) = self.prompt("Enter process name: ")? else {
                    return Ok(Flow::Exit);
                };
                let prompt = "Enter parent PID (-1 if none): ";
                let Some(raw) = self.prompt_number::<RawPid>(prompt)? else {
                    return Ok(Flow::Continue);
                };
                let result = self.registry.create(&name, pid_from_raw(raw));
                self.report(&span, result, |pid| {
                    span.record_pid(pid);
                    format!("Created process: PID={}", pid)
                })?;
            }
            MenuChoice::CallFunction => {
                let Some(raw) = self.prompt_pid()? else {
                    return Ok(Flow::Continue);
                };
                let Some(function) = self.prompt("Enter function name: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(pid) = self.resolve_pid(&span, raw, render::NOT_FOUND)? else {
                    return Ok(Flow::Continue);
                };
                let result = self.registry.call(pid, &function);
                self.report(&span, result, |()| {
                    format!("Process {} called function: {}", pid, function)
                })?;
            }
            MenuChoice::RequestIo => {
                let Some(pid) = self.prompt_target(&span, render::NOT_FOUND)? else {
                    return Ok(Flow::Continue);
                };
                let result = self.registry.request_io(pid);
                self.report(&span, result, |()| {
                    format!("Process {} moved to I/O queue.", pid)
                })?;
            }
            MenuChoice::CompleteIo => {
                let Some(pid) = self.prompt_target(&span, render::NOT_IN_IO_QUEUE)? else {
                    return Ok(Flow::Continue);
                };
                let result = self.registry.complete_io(pid);
                self.report(&span, result, |()| {
                    format!(
                        "Process {} completed I/O and returned to ready queue.",
                        pid
                    )
                })?;
            }
            MenuChoice::TerminateProcess => {
                let Some(pid) = self.prompt_target(&span, render::NOT_FOUND)? else {
                    return Ok(Flow::Continue);
                };
                let result = self.registry.terminate(pid);
                self.report(&span, result, |_| format!("Process {} terminated.", pid))?;
            }
            MenuChoice::ReturnFromFunction => {
                let Some(pid) = self.prompt_target(&span, render::NOT_FOUND)? else {
                    return Ok(Flow::Continue);
                };
                let result = self.registry.ret(pid);
                self.report(&span, result, |function| {
                    format!("Process {} returned from function: {}", pid, function)
                })?;
            }
            MenuChoice::ShowState => {
                let state = self.registry.snapshot();
                self.output.write_all(render::snapshot(&state).as_bytes())?;
                span.record_result(true);
            }
            MenuChoice::DumpJson => {
                let state = self.registry.snapshot();
                let json = state
                    .to_json()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(self.output, "{}", json)?;
                span.record_result(true);
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }
}
