//! Log file tracing for the coin list core.
//!
//! Every layer emits `tracing` spans and events. This module installs the
//! subscriber that turns them into plain log lines on disk:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → coinlist.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Lines written to `<data_dir>/coinlist.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! The filter comes from `trace_level` in [`Config`](crate::Config), default
//! `"info"`. Any `EnvFilter` directive such as `coinlist::fetcher=trace` works.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
