//! ClearScope CLI library.
//!
//! Thin layer over the engine and store crates: argument parsing, profile
//! configuration, session-snapshot loading and output formatting. All of
//! the domain logic lives in clearscope-engine; this crate only moves data
//! to and from it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod session;

pub use cli::{Cli, CliFormat, Command};
pub use config::{Config, OutputFormat, Profile, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::SessionFile;
