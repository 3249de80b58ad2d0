use std::path::{Path, PathBuf};

mod config;
mod demo;
mod list;
mod show;
mod terminal;
mod tiers;

use anyhow::Context;
use clap::ArgAction;
use demo::Demo;
use list::List;
use recipebook::{seed, Catalog, Config};
use show::Show;
use tiers::Tiers;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file (ignored if it does not exist)
    #[arg(short, long, default_value = "recipes.toml", global = true)]
    config: PathBuf,

    /// Seed file to build the catalog from (defaults to the built-in sample)
    #[arg(short, long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or(Command::Demo(Demo {}))
            .run(&self.config, self.seed.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Walk through the catalog operations on the loaded recipes (default)
    Demo(Demo),

    /// List recipes at or above a tier
    List(List),

    /// Show a single recipe, by id or by position
    Show(Show),

    /// Count recipes per tier
    Tiers(Tiers),

    /// Show or modify configuration settings
    Config(config::Command),
}

impl Command {
    fn run(self, config_path: &Path, seed_path: Option<&Path>) -> anyhow::Result<()> {
        // Configuration edits never need the catalog.
        if let Self::Config(command) = self {
            return command.run(config_path);
        }

        let session = Session::open(config_path, seed_path)?;
        match self {
            Self::Demo(command) => command.run(session)?,
            Self::List(command) => command.run(&session)?,
            Self::Show(command) => command.run(&session)?,
            Self::Tiers(command) => command.run(&session)?,
            Self::Config(_) => {}
        }
        Ok(())
    }
}

/// The catalog being browsed, together with the presentation settings.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    config: Config,
}

impl Session {
    #[instrument(level = "debug")]
    fn open(config_path: &Path, seed_path: Option<&Path>) -> anyhow::Result<Self> {
        let config = if config_path.exists() {
            Config::load(config_path).map_err(|e| anyhow::anyhow!("{e}"))?
        } else {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        };

        let catalog = match seed_path {
            Some(path) => seed::load(path)
                .with_context(|| format!("failed to load recipes from {}", path.display()))?,
            None => seed::sample(),
        };

        tracing::info!(recipes = catalog.len(), "catalog ready");
        Ok(Self { catalog, config })
    }
}
