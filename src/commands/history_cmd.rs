// src/commands/history_cmd.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

const USAGE: &str = "history";

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&[]) {
            return CommandResult::illegal_option("history", flag, USAGE);
        }

        let mut stdout = String::new();
        for (index, line) in ctx.history.iter().enumerate() {
            stdout.push_str(&format!("{}: {}\n", index + 1, line));
        }
        CommandResult::success(stdout)
    }
}
