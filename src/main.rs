use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal, Write};

use memshell::{CommandResult, Effect, Shell};

#[derive(Parser)]
#[command(name = "memshell")]
#[command(about = "An in-memory file system driven by a POSIX-style command set")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Output the result as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Script file with one command line per line
    #[arg()]
    script_file: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    stdout: String,
    stderr: String,
    exit_code: i32,
}

fn main() {
    let cli = Cli::parse();
    let mut shell = Shell::new();

    if let Some(ref line) = cli.command {
        let result = shell.run_line(line);
        finish(&result, cli.json);
    }

    if let Some(ref file) = cli.script_file {
        let script = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("memshell: cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        };
        run_script(&mut shell, &script, cli.json);
    }

    repl(&mut shell);
}

/// Run every line of a script, then exit with the last command's code.
fn run_script(shell: &mut Shell, script: &str, json: bool) -> ! {
    let mut report = RunReport {
        stdout: String::new(),
        stderr: String::new(),
        exit_code: 0,
    };

    for line in script.lines() {
        let result = shell.run_line(line);
        if json {
            report.stdout.push_str(&result.stdout);
            report.stderr.push_str(&result.stderr);
        } else {
            render(&result);
        }
        report.exit_code = result.exit_code;
    }

    if json {
        println!("{}", serde_json::to_string(&report).unwrap_or_default());
    }
    std::process::exit(report.exit_code);
}

/// Interactive loop: prompt, read a line, run it, print the result.
fn repl(shell: &mut Shell) -> ! {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut exit_code = 0;

    prompt(interactive);
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let result = shell.run_line(&line);
        render(&result);
        exit_code = result.exit_code;
        prompt(interactive);
    }
    if interactive {
        println!();
    }
    std::process::exit(exit_code);
}

fn prompt(interactive: bool) {
    if interactive {
        print!("> ");
        let _ = io::stdout().flush();
    }
}

/// Print a command result: effects first, then errors, then output.
fn render(result: &CommandResult) {
    if let Some(Effect::ClearScreen { keep_scrollback }) = result.effect {
        if keep_scrollback {
            print!("\x1B[2J\x1B[H");
        } else {
            print!("\x1B[3J\x1B[2J\x1B[H");
        }
        let _ = io::stdout().flush();
    }
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }
    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
}

fn finish(result: &CommandResult, json: bool) -> ! {
    if json {
        let report = RunReport {
            stdout: result.stdout.clone(),
            stderr: result.stderr.clone(),
            exit_code: result.exit_code,
        };
        println!("{}", serde_json::to_string(&report).unwrap_or_default());
    } else {
        render(result);
    }
    std::process::exit(result.exit_code);
}
