/**
 * Server Configuration
 *
 * Loads deployment configuration from the environment and initializes
 * the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` / `TOKEN_TTL_MINUTES` - token signing (see `AuthConfig`)
 * - `SERVER_PORT` - listen port (default 3000)
 *
 * Unlike optional integrations, the database is load-bearing for every
 * endpoint, so a missing `DATABASE_URL` fails startup instead of
 * degrading into a partial server.
 */

use sqlx::PgPool;

use crate::auth::sessions::AuthConfig;

/// Deployment configuration assembled from the environment
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Fails only when `DATABASE_URL` is absent; everything else has a
    /// development default.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let database_url = std::env::var("DATABASE_URL")?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        Ok(Self {
            database_url,
            port,
            auth: AuthConfig::from_env(),
        })
    }
}

/// Create the connection pool and bring the schema up to date
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}
