use dotenv::dotenv;
use std::process::ExitCode;
use std::sync::Arc;

use token_backend::db::Database;
use token_backend::store::SqliteTokenStore;
use token_backend::{Config, MigrationDirection, Migrator, TokenStoreError};

fn usage() -> String {
    format!(
        "usage: token-backend <{}|{}>",
        MigrationDirection::ToDefault,
        MigrationDirection::FromDefault
    )
}

fn run(direction: MigrationDirection) -> Result<(), TokenStoreError> {
    let config = Config::from_env()?;

    log::info!("Opening user database at {}", config.database_url);
    let db = Arc::new(Database::new(&config.database_url)?);

    let external_db = if config.external_store_url == config.database_url {
        db.clone()
    } else {
        log::info!("Opening external token store at {}", config.external_store_url);
        Arc::new(Database::new(&config.external_store_url)?)
    };
    let external = SqliteTokenStore::new(external_db, config.service_name.clone());

    log::info!("Running {} for service '{}'", direction, config.service_name);
    let result = Migrator::new(&db, &config.service_name)?
        .with_progress_every(config.progress_every)
        .run(direction, &external)?;

    log::info!(
        "{} finished: total={} migrated={} expired={} failed={}",
        direction,
        result.total,
        result.migrated,
        result.expired,
        result.failed()
    );

    // Swapping the active store is up to the services that read tokens
    if result.failed() > 0 {
        log::warn!("{} users were not migrated, rerun to retry them", result.failed());
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let direction = match std::env::args().nth(1).map(|arg| arg.parse::<MigrationDirection>()) {
        Some(Ok(direction)) => direction,
        _ => {
            eprintln!("{}", usage());
            return ExitCode::from(2);
        }
    };

    match run(direction) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{} failed: {}", direction, e);
            ExitCode::FAILURE
        }
    }
}
