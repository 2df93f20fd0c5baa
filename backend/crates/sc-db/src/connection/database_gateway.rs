//! Process-wide connection to the project request store.
//!
//! The pool is opened lazily on first use. Callers that arrive while the
//! first attempt is in flight wait on that same attempt instead of opening
//! their own, so at most one connection attempt runs at a time. When that
//! attempt fails, every caller waiting on it gets the failure. The failure
//! is not cached; the next call starts a fresh attempt.
//!
//! There is no reconnect or retry logic here. Once established, store errors
//! surface to whoever issued the query.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tokio::sync::OnceCell;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DatabaseGateway {
    url: String,
    max_connections: u32,
    pool: OnceCell<SqlitePool>,
    connect_attempts: AtomicUsize,
    failed_attempts: AtomicUsize,
    last_failure: Mutex<Option<String>>,
}

impl DatabaseGateway {
    /// Create a gateway. Nothing is opened until the first call to [`pool`].
    ///
    /// [`pool`]: DatabaseGateway::pool
    pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections: max_connections.max(1),
            pool: OnceCell::new(),
            connect_attempts: AtomicUsize::new(0),
            failed_attempts: AtomicUsize::new(0),
            last_failure: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the shared pool, connecting and migrating on first use.
    pub async fn pool(&self) -> DbErrorResult<&SqlitePool> {
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }

        let failures_seen = self.failed_attempts.load(Ordering::SeqCst);
        self.pool
            .get_or_try_init(|| self.connect_once(failures_seen))
            .await
    }

    /// Whether the pool has been established.
    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    /// Number of connection attempts started so far.
    pub fn connect_attempts(&self) -> usize {
        self.connect_attempts.load(Ordering::SeqCst)
    }

    /// Round-trip a trivial query, connecting first if needed.
    pub async fn ping(&self) -> DbErrorResult<()> {
        let pool = self.pool().await?;
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close the pool if it was opened.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            info!("Closing project request store");
            pool.close().await;
        }
    }

    /// Connect, unless an attempt this caller was waiting on already failed.
    async fn connect_once(&self, failures_seen: usize) -> DbErrorResult<SqlitePool> {
        if self.failed_attempts.load(Ordering::SeqCst) != failures_seen {
            let message = self
                .last_failure
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
                .unwrap_or_else(|| "connection attempt failed".to_string());

            return Err(DbError::Connection {
                url: self.url.clone(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let result = self.connect().await;

        if let Err(ref e) = result {
            *self
                .last_failure
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(e.to_string());
            self.failed_attempts.fetch_add(1, Ordering::SeqCst);
        }

        result
    }

    async fn connect(&self) -> DbErrorResult<SqlitePool> {
        let attempt = self.connect_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Connecting to project request store (attempt {})", attempt);

        let options = SqliteConnectOptions::from_str(&self.url)
            .map_err(|e| self.connection_error(e))?
            .busy_timeout(BUSY_TIMEOUT);

        // Every connection to `:memory:` is its own database, so pin to one
        // connection and never let it idle out.
        let pool_options = if is_in_memory(&self.url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(self.max_connections)
        };

        let options = if is_in_memory(&self.url) {
            options
        } else {
            options.journal_mode(SqliteJournalMode::Wal)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| self.connection_error(e))?;

        debug!("Running project request store migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Project request store ready");
        Ok(pool)
    }

    #[track_caller]
    fn connection_error(&self, e: sqlx::Error) -> DbError {
        error!("Failed to connect to project request store: {}", e);
        DbError::Connection {
            url: self.url.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
