// src/commands/touch.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::NodeKind;

pub struct TouchCommand;

const USAGE: &str = "touch [file ...]";

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&[]) {
            return CommandResult::illegal_option("touch", flag, USAGE);
        }
        if ctx.args.is_empty() {
            return CommandResult::error("touch: missing file operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        for path in &ctx.args {
            if let Err(e) = ctx.vfs.create_at(path, NodeKind::File) {
                stderr.push_str(&format!("touch: {}\n", e));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
