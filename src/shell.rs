//! Shell Session
//!
//! Ties the tokenizer, the command registry, and the virtual file system
//! together, and keeps the per-session command history. One session means
//! one tree and one current working node; commands run to completion, one
//! at a time.

use indexmap::IndexSet;
use log::debug;

use crate::commands::{default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::Vfs;
use crate::parser;

pub struct Shell {
    vfs: Vfs,
    registry: CommandRegistry,
    history: Vec<String>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            vfs: Vfs::new(),
            registry: default_registry(),
            history: Vec::new(),
        }
    }

    /// Record a raw input line in the history, then tokenize and run it.
    pub fn run_line(&mut self, line: &str) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::success(String::new());
        }

        self.history.push(trimmed.to_string());
        match parser::tokenize(trimmed, &mut self.history) {
            Err(message) => CommandResult::error(format!("{}\n", message)),
            Ok(None) => CommandResult::success(String::new()),
            Ok(Some(invocation)) => {
                self.execute(&invocation.name, invocation.args, invocation.flags)
            }
        }
    }

    /// Dispatch a pre-tokenized command against the file system.
    pub fn execute(
        &mut self,
        name: &str,
        args: Vec<String>,
        flags: IndexSet<char>,
    ) -> CommandResult {
        match self.registry.get(name) {
            Some(command) => {
                debug!("{}: command found", name);
                command.execute(CommandContext {
                    args,
                    flags,
                    vfs: &mut self.vfs,
                    history: &self.history,
                })
            }
            None => CommandResult::with_exit_code(
                String::new(),
                format!("{}: command not found\n", name),
                127,
            ),
        }
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn vfs_mut(&mut self) -> &mut Vfs {
        &mut self.vfs
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
