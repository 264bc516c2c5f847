use anyhow::{Context, Result};
use catalogo::{AppState, Command, Config, MediaStorage};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate()?;

    match config.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => run_server(&config).await,
        Command::LoadFixture { path } => load_fixture(&config, &path),
        Command::MigrateMedia => migrate_media(&config),
    }
}

async fn run_server(config: &Config) -> Result<()> {
    let conn = open_database(config)?;
    let media = MediaStorage::from_config(config);
    let state = AppState::new(conn, media, config);

    catalogo::serve(state, config.bind).await
}

fn load_fixture(config: &Config, path: &Path) -> Result<()> {
    let conn = open_database(config)?;
    let report = catalogo::load_fixture(&conn, path)?;

    println!(
        "Imported {} areas, {} trabajos, {} highlights, {} documentos",
        report.areas, report.trabajos, report.highlights, report.documentos
    );
    Ok(())
}

fn migrate_media(config: &Config) -> Result<()> {
    let conn = open_database(config)?;
    let report = catalogo::migrate_media(&conn, &config.media_root)?;

    println!(
        "Media migration completed: {} moved, {} skipped, {} already canonical",
        report.moved, report.skipped, report.unchanged
    );
    Ok(())
}

fn open_database(config: &Config) -> Result<rusqlite::Connection> {
    catalogo::open_db(&config.database)
        .with_context(|| format!("Failed to open database: {}", config.database.display()))
}
