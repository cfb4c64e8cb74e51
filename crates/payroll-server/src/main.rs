use anyhow::{Context, Result};
use clap::Parser;
use infrastructure::{ServerConfig, run_migrations};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payroll_server::{create_router, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and the RUN_MODE overrides
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Overrides server.port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,payroll_server=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("Payroll server starting...");

    dotenv::dotenv().ok();
    let mut config = ServerConfig::load(&args.config_dir)
        .with_context(|| format!("Failed to load configuration from {}", args.config_dir))?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let database_url = config
        .database
        .url
        .clone()
        .context("database.url (or DATABASE_URL) must be set")?;

    info!(
        max_connections = config.database.max_connections,
        "Connecting to database..."
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&database_url)
        .await?;

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    let state = setup_app_state(pool, config.auth.mode).await;
    info!(auth_mode = ?config.auth.mode, "Services ready");

    let app = create_router(state);
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 API Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
