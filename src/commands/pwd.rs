// src/commands/pwd.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

const USAGE: &str = "pwd";

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&[]) {
            return CommandResult::illegal_option("pwd", flag, USAGE);
        }

        // Arguments are ignored, as in the real thing.
        let cwd = ctx.vfs.cwd();
        CommandResult::success(format!("{}\n", ctx.vfs.path_of(cwd)))
    }
}
