use std::path::PathBuf;

mod library;
mod terminal;
mod vehicles;

use clap::ArgAction;
use shelf::Config;
use tracing::debug;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        debug!(?config, "configuration loaded");

        self.command.unwrap_or_default().run(&config)
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

        // Notices own stdout.
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

#[derive(Debug, Default, clap::Subcommand)]
pub enum Command {
    /// Manage a book catalogue interactively (default)
    #[default]
    Library,

    /// Build and start the regional vehicle line-ups
    Vehicles,
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Library => library::run(config)?,
            Self::Vehicles => vehicles::run(config),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Command};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_the_library() {
        let cli = Cli::try_parse_from(["shelf"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Library));
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["shelf", "vehicles", "-vv", "--config", "shelf.toml"])
            .unwrap();

        assert!(matches!(cli.command, Some(Command::Vehicles)));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.unwrap().to_str(), Some("shelf.toml"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["shelf", "library", "extra"]).is_err());
    }
}
