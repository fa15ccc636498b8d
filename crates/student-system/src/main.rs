mod config;
mod report;

use anyhow::Context;
use chrono::Utc;
use config::Config;
use database::{db::init_database, services::SeedService};
use env_logger::Env;
use log::info;
use std::io::{self, Write};

/// Creates the schema, loads the sample data once and prints the query results
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let db = init_database(&config.database_url)
        .await
        .context("failed to initialize database")?;

    let seeded = SeedService::seed(&db, Utc::now())
        .await
        .context("failed to seed sample data")?;
    info!(
        "Seeded {} rows ({} students, {} courses, {} resources, {} homeworks, {} enrollments)",
        seeded.total(),
        seeded.students,
        seeded.courses,
        seeded.resources,
        seeded.homeworks,
        seeded.student_courses
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&db, &mut out, report::SAMPLE_STUDENT).await?;
    out.flush()?;

    Ok(())
}
