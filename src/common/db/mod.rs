use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, DbConn, DbErr};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(&settings.database.url);
    options.sqlx_logging(settings.debug);
    if settings.database.url.starts_with("sqlite::memory:") {
        // Every pooled connection would otherwise open its own empty database.
        options.max_connections(1).min_connections(1);
    }
    let db = Database::connect(options).await?;
    match db.get_database_backend() {
        DbBackend::Sqlite => {
            db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
        }
        DbBackend::Postgres | DbBackend::MySql => (),
    }
    Migrator::up(&db, None).await?;
    Ok(db)
}
