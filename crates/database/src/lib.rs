//! SQLite persistence layer for the Roomie matching service.
//!
//! This crate stores users, room listings, matches, and chat transcripts
//! using SQLx with SQLite. Nested documents are kept as JSON columns.
//!
//! # Example
//!
//! ```no_run
//! use database::{models::VerificationStatus, user, Database, Preferences};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:roomie.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Record a user's preferences
//!     let preferences = Preferences {
//!         cleanliness: Some(4),
//!         ..Default::default()
//!     };
//!     user::upsert_preferences(db.pool(), "u1", &preferences, VerificationStatus::Pending).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod error;
pub mod ids;
pub mod matches;
pub mod models;
pub mod room;
pub mod user;

pub use error::{DatabaseError, Result};
pub use ids::MonotonicIds;
pub use models::{
    Chat, ChatMessage, Dimensions, Match, NewRoom, Preferences, Room, User, VerificationStatus,
};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// How often and how patiently to retry the initial connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total connection attempts, including the first one. Zero behaves like one.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled after each failure.
    pub initial_backoff: Duration,
    /// Upper bound for the delay between attempts.
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// Try exactly once.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay to wait after `failed` attempts have failed.
    pub fn backoff(&self, failed: u32) -> Duration {
        let factor = 2u32.saturating_pow(failed.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(8),
        }
    }
}

/// Database connection wrapper.
///
/// Cheap to clone; all clones share one pool. Create it once at startup and
/// hand it to whoever needs it.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    pub const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/roomie.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Connect, retrying with exponential backoff according to `policy`.
    ///
    /// Returns the error of the last attempt once all attempts are used up.
    pub async fn connect_with_retry(url: &str, pool_size: u32, policy: RetryPolicy) -> Result<Self> {
        let attempts = policy.max_attempts.max(1);
        let mut failed = 0;

        loop {
            match Self::connect_with_pool_size(url, pool_size).await {
                Ok(db) => return Ok(db),
                Err(err) => {
                    failed += 1;
                    if failed >= attempts {
                        tracing::error!(attempts, error = %err, "Giving up on database connection");
                        return Err(err);
                    }

                    let delay = policy.backoff(failed);
                    tracing::warn!(
                        attempt = failed,
                        of = attempts,
                        retry_in_ms = delay.as_millis() as u64,
                        error = %err,
                        "Database connection failed"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    ///
    /// Any operation attempted afterwards fails with a pool-closed error.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}
