//! Command-line access to the persisted theme preference.
//!
//! Runs the same preference manager as the GUI against the same file, with no
//! system signal, so a stored value or the configured default decides.

use anyhow::{Context, Result};
use pawtrack::{
    AppConfig, JsonFilePreferenceStore, RootMarkers, StaticSystemSignal, ThemeCapabilities,
    ThemeMode, ThemePreferenceManager,
};
use std::env;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: pawtrack-theme <command>

Commands:
  get              Print the active theme
  set <light|dark> Persist the given theme
  toggle           Flip the theme and print the new one
  path             Print the preferences file location
  help             Show this message";

enum Command {
    Get,
    Set(ThemeMode),
    Toggle,
    Path,
    Help,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = env::args().collect();

    let command = match args.get(1).map(String::as_str) {
        None | Some("get") => Command::Get,
        Some("set") => {
            let Some(value) = args.get(2) else {
                anyhow::bail!("set requires an argument: light or dark");
            };
            Command::Set(value.parse()?)
        }
        Some("toggle") => Command::Toggle,
        Some("path") => Command::Path,
        Some("help") | Some("-h") | Some("--help") => Command::Help,
        Some(other) => anyhow::bail!("unknown command '{other}'\n\n{USAGE}"),
    };

    if args.len() > 3 || (args.len() == 3 && !matches!(command, Command::Set(_))) {
        anyhow::bail!("too many arguments\n\n{USAGE}");
    }
    Ok(command)
}

fn preferences_path(config: &AppConfig) -> Result<PathBuf> {
    config
        .preferences_path()
        .context("no configuration directory available for preferences")
}

fn open_manager(config: &AppConfig, path: PathBuf) -> ThemePreferenceManager {
    let capabilities = ThemeCapabilities::new(RootMarkers::new())
        .with_store(JsonFilePreferenceStore::new(path))
        .with_system_signal(StaticSystemSignal(None));
    ThemePreferenceManager::initialize(config.theme_options(), capabilities)
}

fn main() -> Result<()> {
    pawtrack::logging::init();

    let command = parse_args()?;
    let config = AppConfig::load_or_default();

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Path => println!("{}", preferences_path(&config)?.display()),
        Command::Get => {
            let manager = open_manager(&config, preferences_path(&config)?);
            println!("{}", manager.get_theme());
        }
        Command::Set(mode) => {
            let mut manager = open_manager(&config, preferences_path(&config)?);
            manager.set_theme(mode);
            if !manager.is_persistent() {
                anyhow::bail!("theme set to {mode} for this run only; preferences file is not writable");
            }
            println!("{mode}");
        }
        Command::Toggle => {
            let mut manager = open_manager(&config, preferences_path(&config)?);
            let mode = manager.toggle_theme();
            if !manager.is_persistent() {
                anyhow::bail!("theme toggled to {mode} for this run only; preferences file is not writable");
            }
            println!("{mode}");
        }
    }

    Ok(())
}
