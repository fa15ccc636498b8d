#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use database::{db::init_database, services::SeedService};
use sea_orm::DatabaseConnection;

/// Reference time used for all seeded relative dates
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// Fresh in-memory database with the schema applied
pub async fn setup_db() -> DatabaseConnection {
    init_database("sqlite::memory:")
        .await
        .expect("failed to initialize in-memory database")
}

/// Fresh in-memory database holding the sample data
pub async fn seeded_db() -> DatabaseConnection {
    let db = setup_db().await;
    SeedService::seed(&db, fixed_now())
        .await
        .expect("seeding failed");
    db
}
