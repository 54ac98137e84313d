use std::io;

use advisor_core::{Config, locator_from_config, provider::provider_from_config};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    report,
    session::{FETCH_FAILED, InquirePrompt, Session},
};

/// Top-level CLI struct. Without a subcommand the interactive session starts.
#[derive(Debug, Parser)]
#[command(
    name = "weather-advisor",
    version,
    about = "Current weather with clothing, travel and severe-weather advice"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the config file.
    Configure,

    /// Print one report for a city and exit.
    Show {
        /// City name, e.g. "Paris" or "Paris,FR".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(&city).await,
            None => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?.with_env_overrides();
    let provider = provider_from_config(&config)?;

    match provider.observe(city).await {
        Some(observation) => {
            println!("{}", report::render(city, &observation));
            Ok(())
        }
        None => bail!("{FETCH_FAILED}"),
    }
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?.with_env_overrides();
    let provider = provider_from_config(&config)?;
    let locator = locator_from_config(&config)?;

    info!(weather_url = %config.endpoints.weather_url, "starting interactive session");

    Session::new(
        Box::new(locator),
        provider,
        InquirePrompt::default(),
        io::stdout(),
    )
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["weather-advisor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_takes_a_city() {
        let cli = Cli::try_parse_from(["weather-advisor", "show", "Paris,FR"]).unwrap();

        match cli.command {
            Some(Command::Show { city }) => assert_eq!(city, "Paris,FR"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_without_city_is_rejected() {
        assert!(Cli::try_parse_from(["weather-advisor", "show"]).is_err());
    }
}
