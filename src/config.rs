use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use store_actor::{FileStore, MemoryStore, SharedStore, StorageError};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for the file-backed store; `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    pub channel_capacity: usize,
    pub menu_delay: Duration,
    pub notice_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            channel_capacity: 32,
            menu_delay: Duration::ZERO,
            notice_ttl: Duration::from_millis(3000),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = match lookup("RESTAURANT_DATA_DIR") {
            Some(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir)),
            _ => {
                info!("RESTAURANT_DATA_DIR not set, using in-memory storage");
                None
            }
        };

        let channel_capacity: usize = try_load(&lookup, "RESTAURANT_CHANNEL_CAPACITY", "32")?;
        if channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "RESTAURANT_CHANNEL_CAPACITY",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            data_dir,
            channel_capacity,
            menu_delay: Duration::from_millis(try_load(&lookup, "RESTAURANT_MENU_DELAY_MS", "0")?),
            notice_ttl: Duration::from_millis(try_load(
                &lookup,
                "RESTAURANT_NOTICE_TTL_MS",
                "3000",
            )?),
        })
    }

    /// Opens the persistent backing store this config points at.
    pub async fn open_store(&self) -> Result<SharedStore, StorageError> {
        match &self.data_dir {
            Some(dir) => {
                let store = FileStore::open(dir).await?;
                info!(dir = %dir.display(), "Using file storage");
                Ok(std::sync::Arc::new(store))
            }
            None => Ok(MemoryStore::new().shared()),
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }
    })
}
