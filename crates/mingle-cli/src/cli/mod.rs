//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use mingle_core::{config, interrupt, logging};

mod commands;

#[derive(Parser)]
#[command(name = "mingle")]
#[command(version = "0.1")]
#[command(about = "Terminal social discovery app")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pre-fill the email field on the login screen
    #[arg(long, value_name = "EMAIL")]
    email: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;

    if let Some(email) = cli.email {
        config.login_email = Some(email);
    }

    // default to the interactive app
    let Some(command) = cli.command else {
        logging::init().context("initialize logging")?;
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "mingle starting");
        return mingle_tui::run(&config).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["mingle", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Path
            })
        ));
    }

    #[test]
    fn test_parse_email_flag_defaults_to_app() {
        let cli = Cli::try_parse_from(["mingle", "--email", "john@example.com"]).unwrap();
        assert_eq!(cli.email.as_deref(), Some("john@example.com"));
        assert!(cli.command.is_none());
    }
}
