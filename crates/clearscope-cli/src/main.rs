//! ClearScope CLI - validate inspection scopes from the command line.

use clap::Parser;
use clearscope_cli::{commands, Cli, Command, Config, Formatter};
use tracing::Level;

fn main() {
    // Log to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> clearscope_cli::Result<i32> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Validate(args) => {
            let check = args.check;
            let result = commands::execute_validate(args, &config, &formatter)?;
            if check && !result.valid {
                return Ok(2);
            }
        }
        Command::Catalog(args) => {
            commands::execute_catalog(args, &config, &formatter)?;
        }
        Command::Profile(args) => {
            commands::execute_profile(args, &mut config)?;
        }
    }

    Ok(0)
}
