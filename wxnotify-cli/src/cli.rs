use std::fmt;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, ValueEnum};
use tracing::Level;

use wxnotify_core::{AmapClient, BotClient, Config, QueryKind, district, report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxnotify", version, about = "Weather lookup with chat-bot delivery")]
pub struct Cli {
    /// Which report to fetch.
    #[arg(long, value_enum, default_value_t = Action::Live)]
    pub action: Action,

    /// City code, or a known district name, to fetch weather data for.
    #[arg(long, default_value = "110105")]
    pub citycode: String,

    /// Read configuration from this file instead of the platform default.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logging verbosity. Allowed values are 'trace', 'debug', 'info', 'warn',
    /// and 'error' (case insensitive).
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

/// The two recognized query kinds. Anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Live,
    Forecast,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Live => f.write_str("live"),
            Action::Forecast => f.write_str("forecast"),
        }
    }
}

impl From<Action> for QueryKind {
    fn from(action: Action) -> Self {
        match action {
            Action::Live => QueryKind::Live,
            Action::Forecast => QueryKind::Forecast,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let city_code = district::resolve_city_code(&self.citycode)?;

        let weather = AmapClient::new(config.weather.api_key.clone())?;
        let data = weather.query(self.action.into(), &city_code).await?;

        let output = report::render(&data, Local::now());
        println!("{output}");

        let bot = BotClient::new(
            config.telegram.bot_token.clone(),
            config.telegram.chat_id.clone(),
            config.telegram.https_proxy.as_deref(),
        )?;

        let res = bot.send_message(&output).await?;
        if res.status().is_success() {
            println!("Message sent successfully!");
        } else {
            println!("Bot endpoint answered with status {}", res.status());
        }

        Ok(())
    }
}
