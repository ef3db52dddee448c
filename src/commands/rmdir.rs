// src/commands/rmdir.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, NodeKind};

pub struct RmdirCommand;

const USAGE: &str = "rmdir [directory ...]";

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&[]) {
            return CommandResult::illegal_option("rmdir", flag, USAGE);
        }
        if ctx.args.is_empty() {
            return CommandResult::error("rmdir: missing operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        for path in &ctx.args {
            match ctx.vfs.get_file(path) {
                None => {
                    stderr.push_str(&format!("rmdir: {}: no such file or directory\n", path));
                    exit_code = 1;
                }
                Some(id) if ctx.vfs.node(id).kind() == NodeKind::File => {
                    let err = FsError::NotDirectory { path: path.clone() };
                    stderr.push_str(&format!("rmdir: {}\n", err));
                    exit_code = 1;
                }
                Some(id) => match ctx.vfs.remove_file(id) {
                    Ok(()) => {}
                    Err(FsError::PermissionDenied { .. }) => {
                        stderr.push_str(&format!(
                            "rmdir: cannot remove '{}': permission denied\n",
                            path
                        ));
                        exit_code = 1;
                    }
                    Err(e) => {
                        stderr.push_str(&format!("rmdir: {}\n", e));
                        exit_code = 1;
                    }
                },
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
