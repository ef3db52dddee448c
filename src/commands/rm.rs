// src/commands/rm.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, NodeKind};

pub struct RmCommand;

const USAGE: &str = "rm [file ...]";

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&[]) {
            return CommandResult::illegal_option("rm", flag, USAGE);
        }
        if ctx.args.is_empty() {
            return CommandResult::error("rm: missing operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        for path in &ctx.args {
            match ctx.vfs.get_file(path) {
                None => {
                    stderr.push_str(&format!("rm: {}: no such file or directory\n", path));
                    exit_code = 1;
                }
                Some(id) if ctx.vfs.node(id).kind() == NodeKind::Directory => {
                    let err = FsError::IsDirectory { path: path.clone() };
                    stderr.push_str(&format!("rm: {}\n", err));
                    exit_code = 1;
                }
                Some(id) => match ctx.vfs.remove_file(id) {
                    Ok(()) => {}
                    Err(FsError::PermissionDenied { .. }) => {
                        stderr.push_str(&format!(
                            "rm: cannot remove '{}': permission denied\n",
                            path
                        ));
                        exit_code = 1;
                    }
                    Err(e) => {
                        stderr.push_str(&format!("rm: {}\n", e));
                        exit_code = 1;
                    }
                },
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
