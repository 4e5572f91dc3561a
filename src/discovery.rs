//! Command discovery and catalog assembly
//!
//! This module handles:
//! - Scanning `.claude/commands/` directories for custom command files
//! - Merging global and local results with local-over-global precedence
//! - Assembling the full catalog of builtin plus custom commands
//!
//! Scanning is synchronous and read-only. Results are recomputed from disk
//! on every call; there is no caching and no file watching.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::command::{builtin_commands, Command};
use crate::error::{Error, Result};
use crate::log::{DiagnosticSink, TracingSink};

/// Per-user / per-project configuration directory name
const CONFIG_DIR: &str = ".claude";

/// Subdirectory of the configuration directory that holds command files
const COMMANDS_SUBDIR: &str = "commands";

/// Command discovery service.
///
/// Holds the global commands root and the diagnostic sink scan failures are
/// reported through. Each catalog request is independent; nothing is shared
/// or mutated across calls.
pub struct CommandDiscovery {
    global_root: PathBuf,
    sink: Arc<dyn DiagnosticSink>,
}

impl CommandDiscovery {
    /// Create a discovery service rooted at the per-user commands directory
    /// (`~/.claude/commands`).
    ///
    /// Fails only if the home directory cannot be resolved; discovery itself
    /// never fails after construction.
    pub fn new() -> Result<Self> {
        Ok(Self::with_global_root(default_global_root()?))
    }

    /// Create a discovery service with an explicit global commands root
    pub fn with_global_root(global_root: impl Into<PathBuf>) -> Self {
        Self {
            global_root: global_root.into(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink warnings are reported through
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// The global commands root this service scans
    pub fn global_root(&self) -> &Path {
        &self.global_root
    }

    /// Custom commands merged from the global root and, when a working
    /// directory is given, its local `.claude/commands` root.
    ///
    /// Local commands override global ones with the same name. Results are
    /// sorted lexicographically by name so callers see a deterministic order
    /// regardless of how the filesystem lists entries. Never fails: missing
    /// roots contribute nothing, and unreadable directories are reported to
    /// the sink and skipped.
    pub fn custom_commands(&self, working_dir: Option<&Path>) -> Vec<Command> {
        let mut merged: BTreeMap<String, Command> = BTreeMap::new();

        // Always check the global directory
        for command in self.scan_root(&self.global_root) {
            merged.insert(command.name.clone(), command);
        }

        // Check the local directory if provided
        if let Some(working_dir) = working_dir {
            let local_root = working_dir.join(CONFIG_DIR).join(COMMANDS_SUBDIR);
            for command in self.scan_root(&local_root) {
                // Local commands override global ones
                merged.insert(command.name.clone(), command);
            }
        }

        merged.into_values().collect()
    }

    /// All available commands: builtins first in fixed order, then the
    /// merged custom commands.
    ///
    /// A custom command sharing a name with a builtin is not deduplicated;
    /// both entries appear in the catalog.
    pub fn available_commands(&self, working_dir: Option<&Path>) -> Vec<Command> {
        let mut catalog = builtin_commands();
        catalog.extend(self.custom_commands(working_dir));
        catalog
    }

    /// Scan one commands root from its top
    fn scan_root(&self, base: &Path) -> Vec<Command> {
        let mut commands = Vec::new();
        self.scan_directory(base, Path::new(""), &mut commands);
        commands
    }

    /// Recursively scan `base/relative` for `.md` files.
    ///
    /// A missing directory contributes nothing; any other listing failure
    /// yields an empty partial result for that subtree only, and siblings
    /// already discovered and sibling subtrees are kept.
    fn scan_directory(&self, base: &Path, relative: &Path, commands: &mut Vec<Command>) {
        let full_path = base.join(relative);

        let entries = match fs::read_dir(&full_path) {
            Ok(entries) => entries,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return,
            Err(source) => {
                self.warn_scan_failure(&full_path, source);
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    self.warn_scan_failure(&full_path, source);
                    break;
                }
            };
            let entry_path = relative.join(entry.file_name());
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => {
                    self.warn_scan_failure(&full_path.join(entry.file_name()), source);
                    continue;
                }
            };

            if file_type.is_dir() {
                // Recursively scan subdirectories
                self.scan_directory(base, &entry_path, commands);
            } else if file_type.is_file() {
                // Command name is the relative path without the .md
                // extension, separators normalized, with a leading slash
                let entry_name = entry_path.to_string_lossy().replace('\\', "/");
                if let Some(stem) = entry_name.strip_suffix(".md") {
                    commands.push(Command::custom(format!("/{stem}")));
                }
            }
            // Anything else (symlinks, sockets, ...) is silently ignored
        }
    }

    fn warn_scan_failure(&self, path: &Path, source: io::Error) {
        self.sink.warn(
            "Failed to scan commands directory",
            &Error::read_dir(path, source),
        );
    }
}

impl fmt::Debug for CommandDiscovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDiscovery")
            .field("global_root", &self.global_root)
            .finish_non_exhaustive()
    }
}

/// The default global commands root, `~/.claude/commands`
pub fn default_global_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR).join(COMMANDS_SUBDIR))
        .ok_or(Error::HomeDirectory)
}
