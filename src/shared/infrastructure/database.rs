use crate::log_info;
use crate::shared::config::AppConfig;
use crate::shared::errors::AppError;
use crate::shared::utils::logger::{LogContext, TimedOperation, SLOW_ACQUIRE_MS};
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use serde::Serialize;
use std::time::Duration;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        log_info!(
            "Initializing database connection to: {}",
            config.database_host()
        );

        let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());

        let min_idle = std::cmp::max(1, config.pool_size / 4);
        let pool = r2d2::Pool::builder()
            .max_size(config.pool_size)
            .min_idle(Some(min_idle))
            // Connection timeouts
            .connection_timeout(Duration::from_secs(10)) // Time to wait for connection from pool
            .idle_timeout(Some(Duration::from_secs(300))) // Close idle connections after 5 minutes
            .max_lifetime(Some(Duration::from_secs(1800))) // Replace connections after 30 minutes
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}, min_idle: {}",
            pool.max_size(),
            min_idle
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        let timer = TimedOperation::new("db_connection_acquire");

        match self.pool.get() {
            Ok(conn) => {
                let duration = timer.elapsed_ms();
                if duration > SLOW_ACQUIRE_MS {
                    LogContext::slow_operation("db_connection_acquire", duration);
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Apply any embedded migrations that have not run yet
    pub fn run_migrations(&self) -> Result<usize, AppError> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        for version in &applied {
            log_info!("Applied migration {}", version);
        }
        Ok(applied.len())
    }

    /// Get pool statistics for monitoring
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}
