use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn default_data_dir() -> PathBuf {
    PathBuf::from("bot_data")
}

fn default_code_expiry() -> i64 {
    3
}

/// Verification codes never outlive a day.
const MAX_CODE_EXPIRY_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub bot_token: String,
    #[serde(default)]
    pub admin_ids: Vec<i64>,
    /// Receives support messages. The admin allowlist adds it on its own.
    pub support_id: Option<i64>,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    pub creator_url: Option<String>,
    #[serde(default = "default_code_expiry")]
    pub code_expiry_minutes: i64,
}

impl BotConfig {
    pub fn load() -> Result<Self> {
        let config_paths = ["/etc/storefront/bot.toml", "./storefront.toml"];

        for path in config_paths {
            if Path::new(path).exists() {
                tracing::info!("Loading config from {}", path);
                return Self::from_file(path);
            }
        }

        tracing::info!("Loading config from environment");
        Self::from_env()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config.normalized())
    }

    pub fn from_env() -> Result<Self> {
        let admin_ids = std::env::var("ADMIN_IDS").unwrap_or_default();
        let config = Self {
            bot_token: std::env::var("BOT_TOKEN").context("BOT_TOKEN is not set")?,
            admin_ids: parse_id_list(&admin_ids).context("ADMIN_IDS must be comma separated ids")?,
            support_id: std::env::var("SUPPORT_ID")
                .ok()
                .map(|v| v.trim().parse::<i64>())
                .transpose()
                .context("SUPPORT_ID must be a numeric id")?,
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            creator_url: std::env::var("CREATOR_URL").ok().filter(|s| !s.is_empty()),
            code_expiry_minutes: std::env::var("CODE_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_code_expiry),
        };
        Ok(config.normalized())
    }

    /// How long a checkout verification code stays valid.
    pub fn code_expiry(&self) -> chrono::Duration {
        chrono::Duration::try_minutes(self.code_expiry_minutes)
            .unwrap_or_else(|| chrono::Duration::minutes(default_code_expiry()))
    }

    fn normalized(mut self) -> Self {
        if !(1..=MAX_CODE_EXPIRY_MINUTES).contains(&self.code_expiry_minutes) {
            tracing::warn!(
                "code_expiry_minutes = {} is out of range; using {}",
                self.code_expiry_minutes,
                default_code_expiry()
            );
            self.code_expiry_minutes = default_code_expiry();
        }
        self
    }
}

fn parse_id_list(raw: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<i64>)
        .collect()
}
