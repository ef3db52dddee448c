// src/commands/types.rs
use indexmap::IndexSet;

use crate::fs::Vfs;

/// Non-textual request for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Clear the visible screen; optionally keep the scrollback buffer.
    ClearScreen { keep_scrollback: bool },
}

/// Result of executing one command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub effect: Option<Effect>,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0, effect: None }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1, effect: None }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, effect: None }
    }

    pub fn effect(effect: Effect) -> Self {
        Self { stdout: String::new(), stderr: String::new(), exit_code: 0, effect: Some(effect) }
    }

    /// Usage error for a flag outside the command's accepted set. Commands
    /// short-circuit on this before touching the tree.
    pub fn illegal_option(cmd: &str, flag: char, usage: &str) -> Self {
        Self::error(format!("{}: illegal option -- {}\nusage: {}\n", cmd, flag, usage))
    }
}

/// Execution context handed to every command.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub flags: IndexSet<char>,
    pub vfs: &'a mut Vfs,
    pub history: &'a [String],
}

impl CommandContext<'_> {
    /// First flag not in `accepted`, if any.
    pub fn first_illegal_flag(&self, accepted: &[char]) -> Option<char> {
        self.flags.iter().find(|flag| !accepted.contains(flag)).copied()
    }
}

/// A shell command operating on the virtual file system.
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_option_message_shape() {
        let result = CommandResult::illegal_option("ls", 'z', "ls [-a] [file ...]");
        assert_eq!(result.stderr, "ls: illegal option -- z\nusage: ls [-a] [file ...]\n");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_first_illegal_flag() {
        let mut vfs = Vfs::new();
        let ctx = CommandContext {
            args: vec![],
            flags: ['a', 'z'].into_iter().collect(),
            vfs: &mut vfs,
            history: &[],
        };
        assert_eq!(ctx.first_illegal_flag(&['a']), Some('z'));
        assert_eq!(ctx.first_illegal_flag(&['a', 'z']), None);
    }
}
