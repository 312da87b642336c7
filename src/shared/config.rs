use std::env;
use std::net::SocketAddr;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const MAX_POOL_SIZE: u32 = 20;

/// Process configuration, read from the environment (and `.env` if present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub pool_size: u32,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?;
        Self::validate_database_url(&database_url)?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::ConfigError(format!("Invalid BIND_ADDR: {}", e)))?;

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => {
                let size = raw.parse::<u32>().map_err(|e| {
                    AppError::ConfigError(format!("Invalid DATABASE_POOL_SIZE: {}", e))
                })?;
                if size == 0 {
                    return Err(AppError::ConfigError(
                        "DATABASE_POOL_SIZE must be positive".to_string(),
                    ));
                }
                size
            }
            None => Self::default_pool_size(),
        };

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
        })
    }

    fn validate_database_url(database_url: &str) -> AppResult<()> {
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://")
        {
            return Err(AppError::ConfigError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Base pool size on CPU count, capped
    fn default_pool_size() -> u32 {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        std::cmp::min(cpu_count * 2, MAX_POOL_SIZE as usize) as u32
    }

    /// Host part of the database URL, safe to log
    pub fn database_host(&self) -> &str {
        self.database_url
            .rsplit('@')
            .next()
            .unwrap_or("unknown_host")
    }
}
