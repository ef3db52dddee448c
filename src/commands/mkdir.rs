// src/commands/mkdir.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::NodeKind;

pub struct MkdirCommand;

const USAGE: &str = "mkdir [directory ...]";

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&[]) {
            return CommandResult::illegal_option("mkdir", flag, USAGE);
        }
        if ctx.args.is_empty() {
            return CommandResult::error("mkdir: missing operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        // A failing argument is reported and the rest still run; earlier
        // creations are never rolled back.
        for path in &ctx.args {
            if let Err(e) = ctx.vfs.create_at(path, NodeKind::Directory) {
                stderr.push_str(&format!("mkdir: {}\n", e));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
