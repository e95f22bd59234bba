//! Process configuration.
//!
//! Everything is supplied through the environment (or equivalent CLI flags)
//! at startup and never re-read while running. Required values that are
//! missing make startup fail with a usage error; nothing is validated
//! lazily inside a poll cycle.
//!
//! The parsed [`Config`] is built once in `main` and passed by reference
//! into the watcher and its collaborators. There is no global client or
//! settings state anywhere in the crate.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Album Minder - polls an Immich server and alerts a Telegram chat when
/// tracked albums change size.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Immich API key sent with every request
    #[arg(long, env = "IMMICH_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Immich API base URL, e.g. https://photos.example.com/api
    #[arg(long, env = "IMMICH_ENDPOINT")]
    pub endpoint: String,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// Telegram chat that receives the alerts
    #[arg(long, env = "TELEGRAM_CHAT_ID", allow_hyphen_values = true)]
    pub chat_id: String,

    /// Album names to track (comma-separated)
    #[arg(long, env = "ALBUMS", value_delimiter = ',', required = true)]
    pub albums: Vec<String>,

    /// Seconds between polls
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "3600")]
    pub interval_secs: u64,

    /// Port for the liveness listener
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Snapshot cache file (default: OS cache directory)
    #[arg(long, env = "CACHE_PATH")]
    pub cache_path: Option<PathBuf>,
}

/// Validated runtime configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub bot_token: String,
    pub chat_id: String,
    /// Tracked album names, in configured order, whitespace-trimmed
    pub albums: Vec<String>,
    pub interval: Duration,
    pub port: u16,
    /// None means the OS cache directory default
    pub cache_path: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let albums = cli
            .albums
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            api_key: cli.api_key,
            endpoint: cli.endpoint,
            bot_token: cli.bot_token,
            chat_id: cli.chat_id,
            albums,
            interval: Duration::from_secs(cli.interval_secs),
            port: cli.port,
            cache_path: cli.cache_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: &[&str] = &[
        "album-minder",
        "--api-key",
        "secret",
        "--endpoint",
        "http://immich.local/api",
        "--bot-token",
        "123:tok",
        "--chat-id",
        "-100200300",
        "--albums",
        "Pearly",
    ];

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(REQUIRED).unwrap();
        let config = Config::from(cli);

        assert_eq!(config.interval, Duration::from_secs(3600));
        assert_eq!(config.port, 8080);
        assert!(config.cache_path.is_none());
        assert_eq!(config.albums, vec!["Pearly"]);
    }

    #[test]
    fn test_album_list_is_split_and_trimmed() {
        let mut args: Vec<&str> = REQUIRED.to_vec();
        let last = args.len() - 1;
        args[last] = "Pearly, Holiday 2025 ,Pets";

        let config = Config::from(Cli::try_parse_from(args).unwrap());

        assert_eq!(config.albums, vec!["Pearly", "Holiday 2025", "Pets"]);
    }

    #[test]
    fn test_missing_required_value_fails_parse() {
        // No albums anywhere: startup must fail, not limp along
        let args = &REQUIRED[..REQUIRED.len() - 2];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_interval_and_port_overrides() {
        let mut args: Vec<&str> = REQUIRED.to_vec();
        args.extend(["--interval-secs", "60", "--port", "9090"]);

        let config = Config::from(Cli::try_parse_from(args).unwrap());

        assert_eq!(config.interval, Duration::from_secs(60));
        assert_eq!(config.port, 9090);
    }
}
