//! memshell - an in-memory file system driven by a POSIX-style command set
//!
//! The whole tree lives in memory and is rebuilt fresh each session. The
//! library exposes the node tree and path resolver (`fs`), the command set
//! and its registry (`commands`), the line tokenizer with history expansion
//! (`parser`), and the session that ties them together (`shell`).

pub mod commands;
pub mod fs;
pub mod parser;
pub mod shell;

pub use commands::{Command, CommandRegistry, CommandResult, Effect};
pub use fs::{FsError, NodeId, NodeKind, Permissions, Vfs};
pub use parser::{tokenize, Invocation};
pub use shell::Shell;
