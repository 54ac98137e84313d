//! The interactive menu: an automatic report for where the user is, then
//! reports on demand, with an optional timed repeat.

use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
    time::Duration,
};

use advisor_core::{GeoLocator, WeatherProvider};
use anyhow::{Context, Result};
use chrono::{Local, TimeDelta};
use inquire::InquireError;
use tracing::{debug, info};

use crate::report;

const CITY_PROMPT: &str =
    "Do you want to check another location? (Enter city name or type 'no' to exit):";
const UPDATES_PROMPT: &str = "Do you want continuous weather updates? (yes/no):";
const INTERVAL_PROMPT: &str = "Enter update interval in seconds (e.g., 60 for 1 min):";
const STOP_PROMPT: &str = "Enter 'stop' to stop notifications:";

pub const FETCH_FAILED: &str = "Could not fetch current weather data.";
pub const INVALID_INTERVAL: &str = "⚠️ Invalid input. Please enter a number.";
pub const NOTIFICATIONS_STOPPED: &str = "✅ Notifications stopped.";
pub const FAREWELL: &str = "✅ Exiting. Stay safe! 🌞";

/// Source of the user's answers.
pub trait Prompt {
    /// Ask one question. `None` means input is closed and nothing more will come.
    fn ask(&mut self, message: &str) -> Result<Option<String>>;
}

/// Terminal prompts. Esc or Ctrl-C close the input. When stdin is not a
/// terminal (piped or redirected) answers are read line by line instead.
#[derive(Debug, Default)]
pub struct InquirePrompt {
    line_mode: bool,
}

impl Prompt for InquirePrompt {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        if self.line_mode {
            return read_answer(io::stdin().lock(), io::stdout(), message);
        }

        match inquire::Text::new(message).prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(InquireError::NotTTY) => {
                debug!("stdin is not a terminal, reading answers line by line");
                self.line_mode = true;
                read_answer(io::stdin().lock(), io::stdout(), message)
            }
            Err(err) => Err(err).context("Failed to read answer from terminal"),
        }
    }
}

/// Print the question, then read one line. End of input gives `None`.
pub fn read_answer<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message} ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read answer from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Whole seconds; anything that isn't a non-negative integer is rejected.
pub fn parse_interval(raw: &str) -> Result<Duration, ParseIntError> {
    raw.trim().parse::<u64>().map(Duration::from_secs)
}

pub struct Session<P, W> {
    locator: Box<dyn GeoLocator>,
    weather: Box<dyn WeatherProvider>,
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub fn new(
        locator: Box<dyn GeoLocator>,
        weather: Box<dyn WeatherProvider>,
        prompt: P,
        out: W,
    ) -> Self {
        Self {
            locator,
            weather,
            prompt,
            out,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.report_current_location().await?;

        loop {
            let Some(answer) = self.prompt.ask(CITY_PROMPT)? else {
                break;
            };

            let city = answer.trim();
            if city.eq_ignore_ascii_case("no") {
                break;
            }
            if city.is_empty() {
                continue;
            }

            self.show_report(city).await?;

            if self.offer_updates(city).await? == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "\n{FAREWELL}")?;
        Ok(())
    }

    async fn report_current_location(&mut self) -> Result<()> {
        let Some(location) = self.locator.locate().await else {
            return Ok(());
        };

        writeln!(
            self.out,
            "\nFetching weather updates for: {}, {}...",
            location.city, location.country
        )?;
        self.show_report(&location.city).await
    }

    pub async fn show_report(&mut self, city: &str) -> Result<()> {
        match self.weather.observe(city).await {
            Some(observation) => writeln!(self.out, "{}", report::render(city, &observation))?,
            None => writeln!(self.out, "{FETCH_FAILED}")?,
        }
        Ok(())
    }

    async fn offer_updates(&mut self, city: &str) -> Result<Flow> {
        let Some(answer) = self.prompt.ask(UPDATES_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        if !answer.trim().eq_ignore_ascii_case("yes") {
            return Ok(Flow::Continue);
        }

        let Some(raw) = self.prompt.ask(INTERVAL_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match parse_interval(&raw) {
            Ok(interval) => self.notify(city, interval).await,
            Err(err) => {
                debug!(input = raw.trim(), error = %err, "rejected update interval");
                writeln!(self.out, "{INVALID_INTERVAL}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Report, wait the full interval, then ask whether to stop. The wait itself
    /// cannot be interrupted from the prompt.
    async fn notify(&mut self, city: &str, interval: Duration) -> Result<Flow> {
        info!(city, seconds = interval.as_secs(), "starting continuous updates");

        loop {
            self.show_report(city).await?;

            let next_at = TimeDelta::from_std(interval)
                .ok()
                .and_then(|delta| Local::now().checked_add_signed(delta));
            match next_at {
                Some(at) => writeln!(
                    self.out,
                    "📢 Next update in {} seconds, at {}... (Type 'stop' to cancel)",
                    interval.as_secs(),
                    at.format("%H:%M:%S")
                )?,
                None => writeln!(
                    self.out,
                    "📢 Next update in {} seconds... (Type 'stop' to cancel)",
                    interval.as_secs()
                )?,
            }
            self.out.flush()?;

            tokio::time::sleep(interval).await;

            let Some(answer) = self.prompt.ask(STOP_PROMPT)? else {
                return Ok(Flow::Exit);
            };
            if answer.trim().eq_ignore_ascii_case("stop") {
                writeln!(self.out, "{NOTIFICATIONS_STOPPED}")?;
                return Ok(Flow::Continue);
            }
        }
    }
}
