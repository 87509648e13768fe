/*!
 * Console Menu
 * Menu choices and input tokenizing
 */

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub const MENU: &str = "\n--- OS Process Manager (Console) ---\n\
1. Create Process\n\
2. Call Function\n\
3. Request I/O\n\
4. Complete I/O\n\
5. Terminate Process\n\
6. Show State\n\
7. Return From Function\n\
8. Dump State as JSON\n\
0. Exit\n";

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateProcess,
    CallFunction,
    RequestIo,
    CompleteIo,
    TerminateProcess,
    ShowState,
    ReturnFromFunction,
    DumpJson,
    Exit,
}

impl MenuChoice {
    /// Parse a menu number; `None` for anything not on the menu
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().parse::<i64>().ok()? {
            1 => Some(Self::CreateProcess),
            2 => Some(Self::CallFunction),
            3 => Some(Self::RequestIo),
            4 => Some(Self::CompleteIo),
            5 => Some(Self::TerminateProcess),
            6 => Some(Self::ShowState),
            7 => Some(Self::ReturnFromFunction),
            8 => Some(Self::DumpJson),
            0 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Short name used in tracing spans
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateProcess => "create_process",
            Self::CallFunction => "call_function",
            Self::RequestIo => "request_io",
            Self::CompleteIo => "complete_io",
            Self::TerminateProcess => "terminate_process",
            Self::ShowState => "show_state",
            Self::ReturnFromFunction => "return_from_function",
            Self::DumpJson => "dump_json",
            Self::Exit => "exit",
        }
    }
}

/// Whitespace-separated tokens pulled lazily from a line reader
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
