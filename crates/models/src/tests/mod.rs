/// Database connection and configuration tests
pub mod db_tests;

/// Entity-level CRUD tests for all models
pub mod crud_tests;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory SQLite database per test.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
