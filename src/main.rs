/**
 * stack-underflow Server Entry Point
 *
 * Loads configuration, connects to PostgreSQL, runs migrations, and
 * serves the Axum application.
 */

use stack_underflow::server::config::{init_pool, ServerConfig};
use stack_underflow::server::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("DATABASE_URL must be set: {}", e);
        e
    })?;

    let pool = init_pool(&config.database_url).await?;

    let app = create_app(pool, config.auth);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
