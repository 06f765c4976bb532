//! Profile management commands.

use crate::cli::{ProfileArgs, ProfileCommand};
use crate::config::{Config, Profile};
use crate::error::Result;

/// Inspect or modify configuration profiles.
pub fn execute_profile(args: ProfileArgs, config: &mut Config) -> Result<()> {
    match args.command {
        ProfileCommand::List => {
            let mut names: Vec<_> = config.profiles.keys().collect();
            names.sort();
            for name in names {
                let marker = if *name == config.active_profile { "*" } else { " " };
                println!("{} {}", marker, name);
            }
        }
        ProfileCommand::Show => {
            let profile = config.get_active_profile()?;
            println!("Profile: {}", config.active_profile);
            match &profile.catalog_db {
                Some(path) => println!("Catalog DB: {}", path.display()),
                None => println!("Catalog DB: (not set)"),
            }
        }
        ProfileCommand::SetCatalog { path } => {
            config.get_active_profile_mut()?.catalog_db = Some(path);
            config.save()?;
            println!("Updated profile '{}'", config.active_profile);
        }
        ProfileCommand::Use { name } => {
            if !config.profiles.contains_key(&name) {
                config.set_profile(name.clone(), Profile::default());
            }
            config.switch_profile(name)?;
            config.save()?;
            println!("Switched to profile '{}'", config.active_profile);
        }
    }
    Ok(())
}
