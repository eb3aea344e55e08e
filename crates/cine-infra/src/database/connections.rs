use std::env;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the ratings database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins; otherwise the URL is assembled from `APP_POSTGRES_HOST`,
    /// `APP_POSTGRES_PORT`, `APP_POSTGRES_USER` and `APP_POSTGRES_DB`.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let host = env::var("APP_POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("APP_POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let user = env::var("APP_POSTGRES_USER").unwrap_or_else(|_| "postgres".to_string());
            let db = env::var("APP_POSTGRES_DB").unwrap_or_else(|_| "postgres".to_string());
            format!("postgres://{user}@{host}:{port}/{db}")
        });

        Self {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Open the connection pool. Called once at startup; the pool is shared by all requests.
    pub async fn connect(&self) -> Result<DbConn, DbErr> {
        tracing::info!("Initializing ratings database connection...");

        let opts = ConnectOptions::new(&self.url)
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!("Ratings database connected (pool: {})", self.max_connections);

        Ok(conn)
    }
}
