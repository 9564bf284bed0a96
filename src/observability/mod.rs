//! Structured logging with file-based output.
//!
//! This module wires `tracing` into a plain-text log file. The plugin runs in
//! a Zellij pane, so stdout belongs to the renderer and logs go to disk.
//!
//! ```text
//! tracing macros → EnvFilter → fmt::layer() → FileWriter → hirepoint.log
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: `~/.local/share/zellij/hirepoint/hirepoint.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Span Context**: Each line carries its enclosing spans (e.g. `handle_event`)
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` plugin option (an
//! `EnvFilter` directive such as `debug` or `hirepoint=trace`). Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{FileWriter, SharedWriter};
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
