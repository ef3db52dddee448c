// src/commands/cd.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::NodeKind;

pub struct CdCommand;

const USAGE: &str = "cd [directory]";

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&[]) {
            return CommandResult::illegal_option("cd", flag, USAGE);
        }

        // No argument resets to the root. Arguments past the first are ignored.
        let Some(path) = ctx.args.first() else {
            let root = ctx.vfs.root();
            ctx.vfs.set_cwd(root);
            return CommandResult::success(String::new());
        };

        match ctx.vfs.get_file(path) {
            Some(id) if ctx.vfs.node(id).kind() == NodeKind::Directory => {
                ctx.vfs.set_cwd(id);
                CommandResult::success(String::new())
            }
            Some(_) => CommandResult::error(format!("cd: {}: not a directory\n", path)),
            None => CommandResult::error(format!("cd: {}: no such file or directory\n", path)),
        }
    }
}
