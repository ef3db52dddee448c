// src/commands/clear_cmd.rs
use crate::commands::{Command, CommandContext, CommandResult, Effect};

pub struct ClearCommand;

const USAGE: &str = "clear [-x]";

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&['x']) {
            return CommandResult::illegal_option("clear", flag, USAGE);
        }

        // The tree is untouched; the presentation layer acts on the effect.
        CommandResult::effect(Effect::ClearScreen {
            keep_scrollback: ctx.flags.contains(&'x'),
        })
    }
}
