use migration::sea_orm::SqlxPostgresConnector;
use migration::{Migrator, MigratorTrait};
use sqlx::PgPool;
use tracing::info;

/// Applies pending schema migrations over an existing pool
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    let connection = SqlxPostgresConnector::from_sqlx_postgres_pool(pool.clone());
    info!("Running database migrations...");
    Migrator::up(&connection, None).await?;
    info!("✅ Migrations applied");
    Ok(())
}
