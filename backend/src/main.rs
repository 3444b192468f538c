//! `fitforge-backend` binary
//!
//! Reads `.env` and the layered config, opens the PostgreSQL pool, applies
//! the embedded migrations outside production and serves the API until
//! Ctrl+C or SIGTERM.

use anyhow::Result;
use fitforge_backend::{config::AppConfig, db, routes, state::AppState};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let production = AppConfig::is_production();
    init_tracing(production);

    let config = AppConfig::load()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        production,
        hash_algorithm = ?config.auth.hash_algorithm,
        "FitForge backend starting"
    );

    if production {
        check_production(&config)?;
    }

    let pool = db::create_pool(&config.database).await?;
    if production {
        info!("Production mode: expecting migrations to be applied already");
    } else {
        db::run_migrations(&pool).await?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = routes::create_router(AppState::new(pool, config));

    let listener = TcpListener::bind(&addr).await?;
    info!(address = %addr, "Accepting requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("FitForge backend stopped");
    Ok(())
}

/// Pretty logs while developing, JSON lines in production; `RUST_LOG` wins
fn init_tracing(production: bool) {
    let default_filter = if production {
        "fitforge_backend=info,tower_http=info"
    } else {
        "fitforge_backend=debug,tower_http=debug,sqlx=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    if production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

fn check_production(config: &AppConfig) -> Result<()> {
    if config.uses_local_database() {
        warn!("Production database URL points at localhost");
    }

    let problems = config.production_problems();
    for problem in &problems {
        error!(%problem, "Refusing production config");
    }
    if !problems.is_empty() {
        anyhow::bail!("{} production config problem(s)", problems.len());
    }
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM
///
/// A handler that cannot be installed is logged and never fires, leaving
/// the other one in charge.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let source = tokio::select! {
        _ = ctrl_c => "ctrl_c",
        _ = terminate => "sigterm",
    };
    info!(signal = source, "Draining connections before exit");
}
