use crate::api::{self, AppState};
use crate::dal::DAL;
use crate::db::{create_shared_connection_pool, ConnectionPool};
use crate::utils;
use ghostrdp_utils::config::Settings;
use ghostrdp_utils::logging::prelude::*;
use tokio::signal;

type CommandResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn open_pool(config: &Settings) -> CommandResult<ConnectionPool> {
    info!("Creating database connection pool for {}", config.database.url);
    let pool = create_shared_connection_pool(
        &config.database.url,
        config.database.pool_size,
        config.database.busy_timeout_ms,
    )?;
    Ok(pool)
}

fn apply_migrations(pool: &ConnectionPool) -> CommandResult<()> {
    info!("Running pending database migrations");
    let applied = pool.run_migrations()?;
    if applied.is_empty() {
        info!("Database schema is up to date");
    } else {
        info!("Applied {} migration(s): {}", applied.len(), applied.join(", "));
    }
    Ok(())
}

/// Starts the ghost-rdp backend.
///
/// Migrates the database, applies audit retention when configured, then serves
/// the API until Ctrl-C.
pub async fn serve(config: &Settings) -> CommandResult<()> {
    info!("Starting ghost-rdp backend");

    let pool = open_pool(config)?;
    apply_migrations(&pool)?;

    let dal = DAL::new(pool).with_peer_delete_policy(config.gateway.peer_delete_policy);
    info!(
        "Peer delete policy: {:?}",
        config.gateway.peer_delete_policy
    );

    if let Some(days) = config.audit.retention_days {
        let removed = dal.audit_logs().prune_older_than_days(days)?;
        info!(
            "Pruned {} audit entries older than {} day(s)",
            removed, days
        );
    }

    match config.gateway.remote_api_url() {
        Some(url) => info!("Remote API configured at {}", url),
        None => info!("No remote API configured"),
    }
    if config.gateway.secret_key.is_none() {
        debug!("No gateway secret key configured");
    }

    info!("Configuring API routes");
    let state = AppState {
        dal,
        gateway: config.gateway.clone(),
    };
    let app = api::configure_api_routes(&config.cors).with_state(state);

    let addr = &config.server.bind_address;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for ctrl+c: {}", e);
        }
        shutdown_tx.send(()).ok();
    });

    info!("ghost-rdp backend is now running");
    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown(shutdown_rx))
        .await?;

    Ok(())
}

/// Runs pending migrations and exits.
pub fn migrate(config: &Settings) -> CommandResult<()> {
    let pool = open_pool(config)?;
    apply_migrations(&pool)
}

/// Deletes audit entries older than `days` days.
pub fn prune_audit(config: &Settings, days: i64) -> CommandResult<usize> {
    let pool = open_pool(config)?;
    apply_migrations(&pool)?;

    let removed = DAL::new(pool).audit_logs().prune_older_than_days(days)?;
    info!("Pruned {} audit entries older than {} day(s)", removed, days);
    Ok(removed)
}
