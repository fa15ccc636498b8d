use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection
///
/// The whole run happens over a single session, which also keeps an
/// in-memory SQLite database alive between statements.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging_level(log::LevelFilter::Debug);

    Database::connect(opt).await
}

/// Connects and brings the schema up to date
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = create_connection(database_url).await?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("Migrations completed successfully");

    Ok(db)
}
