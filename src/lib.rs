//! Command catalog discovery for interactive Claude CLI assistants.
//!
//! A catalog is the fixed set of built-in slash commands plus any custom
//! commands the user has defined as Markdown files under `.claude/commands/`
//! directories. Custom commands are discovered from two roots:
//!
//! - the global root `~/.claude/commands/`, always scanned
//! - a local root `<working-dir>/.claude/commands/`, scanned only when a
//!   working directory is supplied; local entries override global entries
//!   with the same name
//!
//! ## Usage
//!
//! ```no_run
//! use claude_commands::CommandDiscovery;
//!
//! let discovery = CommandDiscovery::new()?;
//!
//! // Everything the assistant can offer, builtins first
//! let catalog = discovery.available_commands(Some("/path/to/project".as_ref()));
//! for command in &catalog {
//!     println!("{}", command.name);
//! }
//! # Ok::<(), claude_commands::Error>(())
//! ```
//!
//! Discovery never fails once constructed: missing directories contribute
//! zero commands, and unreadable directories are logged as warnings and
//! skipped rather than surfaced to the caller.

pub mod command;
pub mod discovery;
pub mod error;
pub mod log;


// Re-export commonly used types
pub use command::{builtin_commands, Command, CommandType};
pub use discovery::CommandDiscovery;
pub use error::{Error, Result};
pub use log::{DiagnosticSink, TracingSink};

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
