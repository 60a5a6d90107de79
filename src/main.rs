use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use theme_class::{FileStore, ThemeConfig, ThemeController};

#[derive(Debug, Parser)]
#[command(name = "theme-class", version, about = "Inspect and switch the persisted theme class")]
struct Cli {
    /// Config file (defaults to ~/.config/theme-class/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding persisted theme data
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Persistence key
    #[arg(long)]
    key: Option<String>,

    /// Comma separated theme classes, overriding the config file
    #[arg(long, value_delimiter = ',')]
    themes: Vec<String>,

    /// Theme to put first when nothing is persisted yet
    #[arg(long)]
    default_theme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the active theme class
    Current,
    /// Print all theme classes, marking the active one
    List,
    /// Switch to the next theme class
    Toggle,
    /// Switch to the named theme class
    Set { theme: String },
    /// Rotate the list so the named theme class comes first
    Default { theme: String },
    /// Replace the theme class list
    SetClasses {
        #[arg(value_delimiter = ',', required = true)]
        themes: Vec<String>,
    },
    /// Remove the persisted theme data
    Clear,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let store = match &cli.dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::in_config_dir().context("could not determine a home directory")?,
    };
    info!(root = %store.root().display(), key = %config.persist.key, "Using theme store");

    let mut controller = ThemeController::new(config, store)?;
    run(&mut controller, cli.command)
}

fn resolve_config(cli: &Cli) -> Result<ThemeConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = ThemeConfig::load_from_path(path)?;
            config.apply_env(|name| std::env::var(name).ok());
            config
        }
        None => ThemeConfig::load(),
    };

    if !cli.themes.is_empty() {
        config.theme_classes = cli.themes.clone();
    }
    if let Some(key) = &cli.key {
        config.persist.key = key.clone();
    }
    if let Some(theme) = &cli.default_theme {
        config.default_theme = Some(theme.clone());
    }
    Ok(config)
}

fn run(controller: &mut ThemeController, command: Command) -> Result<()> {
    match command {
        Command::Current => {}
        Command::List => {
            let current = controller.state().current;
            for (i, theme) in controller.theme_classes().iter().enumerate() {
                let marker = if i == current { '*' } else { ' ' };
                println!("{marker} {theme}");
            }
            return Ok(());
        }
        Command::Toggle => controller.toggle_theme(),
        Command::Set { theme } => controller.set_current_theme(theme),
        Command::Default { theme } => controller.set_default(theme),
        Command::SetClasses { themes } => controller.set_theme_classes(themes),
        Command::Clear => {
            controller.clear_persisted_theme_data();
            return Ok(());
        }
    }

    if let Some(err) = controller.error() {
        return Err(anyhow!("{}", err.describe()));
    }
    println!("{}", controller.current_theme());
    Ok(())
}
