// src/commands/ls.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::NodeKind;

pub struct LsCommand;

const USAGE: &str = "ls [-a] [file ...]";

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Some(flag) = ctx.first_illegal_flag(&['a']) {
            return CommandResult::illegal_option("ls", flag, USAGE);
        }
        let show_hidden = ctx.flags.contains(&'a');

        let mut paths = ctx.args.clone();
        if paths.is_empty() {
            paths.push(".".to_string());
        }
        let with_headers = paths.len() > 1;

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;

        for path in &paths {
            let Some(id) = ctx.vfs.get_file(path) else {
                stderr.push_str(&format!("ls: {}: no such file or directory\n", path));
                exit_code = 1;
                continue;
            };

            let node = ctx.vfs.node(id);
            if node.kind() == NodeKind::File {
                stdout.push_str(&format!("{}\n", node.name()));
                continue;
            }

            if with_headers {
                stdout.push_str(&format!("{}:\n", node.name()));
            }
            let names: Vec<&str> = node
                .child_names()
                .into_iter()
                .filter(|name| show_hidden || !name.starts_with('.'))
                .collect();
            if !names.is_empty() {
                stdout.push_str(&names.join("\t"));
                stdout.push('\n');
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}
