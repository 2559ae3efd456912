use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "mood-journal-storage";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,

    pub chat_reply_delay_ms: u64,
    pub chat_welcome_delay_ms: u64,

    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            chat_reply_delay_ms: 500,
            chat_welcome_delay_ms: 300,
            log_filter: "moodjournal_core=info".into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            data_dir: env::var("MOODJOURNAL_DATA_DIR")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_key: env::var("MOODJOURNAL_STORAGE_KEY")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.storage_key),

            chat_reply_delay_ms: env::var("MOODJOURNAL_CHAT_REPLY_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.chat_reply_delay_ms),
            chat_welcome_delay_ms: env::var("MOODJOURNAL_CHAT_WELCOME_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.chat_welcome_delay_ms),

            log_filter: env::var("MOODJOURNAL_LOG").unwrap_or(defaults.log_filter),
        }
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn chat_welcome_delay(&self) -> Duration {
        Duration::from_millis(self.chat_welcome_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = Config::default();
        assert_eq!(config.chat_reply_delay(), Duration::from_millis(500));
        assert_eq!(config.chat_welcome_delay(), Duration::from_millis(300));
        assert_eq!(config.storage_key, "mood-journal-storage");
    }

    #[test]
    fn test_from_env_delay_parsing() {
        // only this test touches these variables
        env::set_var("MOODJOURNAL_CHAT_REPLY_DELAY_MS", "soon");
        env::set_var("MOODJOURNAL_CHAT_WELCOME_DELAY_MS", "120");

        let config = Config::from_env();

        assert_eq!(config.chat_reply_delay_ms, 500);
        assert_eq!(config.chat_welcome_delay_ms, 120);

        env::remove_var("MOODJOURNAL_CHAT_REPLY_DELAY_MS");
        env::remove_var("MOODJOURNAL_CHAT_WELCOME_DELAY_MS");
    }
}
