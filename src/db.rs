use migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use crate::{config::Config, error::AppResult};

pub async fn connect_and_migrate(config: &Config) -> AppResult<DatabaseConnection> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    // min 1 keeps in-memory databases alive between requests
    opt.max_connections(config.db_max_connections.max(1)).min_connections(1);

    let db = Database::connect(opt).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA journal_mode=WAL".to_string(),
    ))
    .await?;

    Migrator::up(&db, None).await?;
    tracing::info!(max_connections = config.db_max_connections, "database connected & migrated");

    Ok(db)
}
