//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ClearScope CLI - validate inspection scopes before finalization.
#[derive(Debug, Parser)]
#[command(name = "clearscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (score and verdict only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a session snapshot against the catalog
    Validate(ValidateArgs),

    /// Manage the estimating catalog
    Catalog(CatalogArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Session snapshot file (JSON)
    pub session: PathBuf,

    /// Catalog database path (overrides the profile)
    #[arg(long)]
    pub catalog_db: Option<PathBuf>,

    /// Catalog JSON file to use instead of a database
    #[arg(long, conflicts_with = "catalog_db")]
    pub catalog_file: Option<PathBuf>,

    /// Exit with a non-zero status when the scope is invalid
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the catalog command.
#[derive(Debug, Parser)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog maintenance subcommands.
#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Load entries from a JSON file into the catalog database
    Seed {
        /// Catalog JSON file
        file: PathBuf,

        /// Catalog database path (overrides the profile)
        #[arg(long)]
        catalog_db: Option<PathBuf>,
    },

    /// List catalog entries
    List {
        /// Catalog database path (overrides the profile)
        #[arg(long)]
        catalog_db: Option<PathBuf>,
    },
}

/// Arguments for the profile command.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands.
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// List profiles
    List,

    /// Show the active profile
    Show,

    /// Set the catalog database path on the active profile
    SetCatalog {
        /// Catalog database path
        path: PathBuf,
    },

    /// Switch the active profile, creating it if needed
    Use {
        /// Profile name
        name: String,
    },
}
