//! Configuration command handlers.
//!
//! These run without a service connection.

use stays_config::Profile;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::active_profile_name;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Path => {
            println!("{}", stays_config::config_path().display());
            Ok(())
        }
        ConfigCommand::Profiles => profiles(global),
        ConfigCommand::Use { name } => use_profile(&name, global),
        ConfigCommand::SetPassword { profile } => set_password(profile.as_deref(), global),
    }
}

/// Guided first-time setup: one profile, optional credentials.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = stays_config::load_config_or_default();

    let name: String = dialoguer::Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(io_err)?;

    let service: String = dialoguer::Input::new()
        .with_prompt("Booking service URL")
        .default("http://localhost:7000/api".into())
        .interact_text()
        .map_err(io_err)?;

    let email: String = dialoguer::Input::new()
        .with_prompt("Account email (empty for browse-only)")
        .allow_empty(true)
        .interact_text()
        .map_err(io_err)?;

    let mut profile = Profile {
        service,
        ..Profile::default()
    };

    if !email.is_empty() {
        profile.email = Some(email);
        let password = rpassword::prompt_password("Password (stored in system keyring): ")?;
        if !password.is_empty() {
            stays_config::store_password(&name, &password)?;
        }
    }

    cfg.profiles.insert(name.clone(), profile);
    if cfg.default_profile.is_none() {
        cfg.default_profile = Some(name.clone());
    }
    stays_config::save_config(&cfg)?;

    if !global.quiet {
        eprintln!(
            "Profile '{name}' written to {}",
            stays_config::config_path().display()
        );
    }
    Ok(())
}

/// Render the resolved configuration. Passwords never appear here; only
/// their source (keyring/env/plaintext) is configuration.
fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = stays_config::load_config_or_default();
    output::Printer::new(global).document(&cfg);
    Ok(())
}

fn profiles(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = stays_config::load_config_or_default();
    let default = cfg.default_profile.as_deref().unwrap_or("default");
    let mut names: Vec<&String> = cfg.profiles.keys().collect();
    names.sort();

    for name in names {
        let marker = if name == default { " (default)" } else { "" };
        println!("{name}{marker}");
    }
    Ok(())
}

fn use_profile(name: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = stays_config::load_config_or_default();
    if !cfg.profiles.contains_key(name) {
        return Err(CliError::ProfileNotFound { name: name.into() });
    }
    cfg.default_profile = Some(name.to_owned());
    stays_config::save_config(&cfg)?;
    if !global.quiet {
        eprintln!("Default profile set to '{name}'");
    }
    Ok(())
}

fn set_password(profile: Option<&str>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = stays_config::load_config_or_default();
    let name = profile
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| active_profile_name(global, &cfg));

    let password = rpassword::prompt_password(format!("Password for profile '{name}': "))?;
    stays_config::store_password(&name, &password)?;
    if !global.quiet {
        eprintln!("Password stored in system keyring for '{name}'");
    }
    Ok(())
}

fn io_err(e: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
