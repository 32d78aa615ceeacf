use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;

use crate::db::{connect_options, connect_with_config};

#[tokio::test]
async fn test_sqlite_memory_connection() -> Result<()> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

#[test]
fn memory_sqlite_pins_single_connection() {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 10,
        min_connections: 2,
        ..Default::default()
    };
    let opt = connect_options(&cfg);
    assert_eq!(opt.get_max_connections(), Some(1));
    assert_eq!(opt.get_min_connections(), Some(1));
}

#[test]
fn pool_bounds_follow_config() {
    let cfg = DatabaseConfig {
        url: "postgres://localhost/roster".into(),
        max_connections: 7,
        min_connections: 3,
        ..Default::default()
    };
    let opt = connect_options(&cfg);
    assert_eq!(opt.get_max_connections(), Some(7));
    assert_eq!(opt.get_min_connections(), Some(3));
}

#[tokio::test]
async fn test_migrations_create_tables() -> Result<()> {
    let db = super::memory_db().await?;
    for table in ["employees", "students", "customers"] {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = ?",
            [table.into()],
        );
        let row = db.query_one(stmt).await?.expect("count row");
        let n: i32 = row.try_get("", "n")?;
        assert_eq!(n, 1, "table {table} missing");
    }
    Ok(())
}
