use std::sync::Arc;

use anyhow::Context;
use axum::{Router, extract::State, routing::get};
use camino::Utf8PathBuf;
use petadex_core::{Facade, StatisticsConfig, source::InMemorySource};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    db::{PgStore, Store},
};

mod api;

/// # Errors
pub async fn serve(mut config: Config, log_dir: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    initialize_logging(log_dir);

    config
        .read_secrets()
        .context("failed to read secrets directory")?;
    let app_addr = config.app_address();

    let app_state = AppState::new(&config).context("failed to initialize app state")?;
    tracing::info!(
        dev = config.is_dev(),
        statistics = ?app_state.facade().config(),
        "initialized app state"
    );

    app_state
        .facade()
        .health()
        .await
        .context("failed to reach record source")?;

    let app = app(app_state);

    let listener = TcpListener::bind(&app_addr)
        .await
        .context(format!("failed to listen on {app_addr}"))?;
    tracing::info!("petadex listening on {app_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("failed to serve app")?;

    Ok(())
}

fn initialize_logging(log_dir: Option<Utf8PathBuf>) {
    use tracing::Level;
    use tracing_subscriber::{filter::Targets, prelude::*};

    let log_layer = tracing_subscriber::fmt::layer();

    match log_dir {
        None => {
            let dev_test_log_filter = Targets::new()
                .with_target("petadex_backend", Level::DEBUG)
                .with_target("petadex_core", Level::DEBUG)
                .with_target("tower_http", Level::TRACE);
            let log_layer = log_layer.pretty().with_filter(dev_test_log_filter);

            tracing_subscriber::registry().with(log_layer).init();
        }
        Some(path) => {
            let log_writer = tracing_appender::rolling::daily(path, "petadex.log");
            let prod_log_filter = Targets::new()
                .with_target("petadex_backend", Level::INFO)
                .with_target("petadex_core", Level::INFO);
            let log_layer = log_layer
                .json()
                .with_writer(log_writer)
                .with_filter(prod_log_filter);

            tracing_subscriber::registry().with(log_layer).init();
        }
    }
}

#[derive(Clone)]
struct AppState {
    facade: Arc<Facade<Store>>,
}
impl AppState {
    fn new(config: &Config) -> anyhow::Result<Self> {
        let store = if config.is_dev() {
            let seed_data = config.seed_data().context("failed to load seed data")?;

            Store::Seeded(InMemorySource::from(seed_data))
        } else {
            let store = PgStore::new(&config.db_url(), config.db_max_connections())
                .context("failed to build database connection pool")?;

            Store::Postgres(store)
        };

        Ok(Self::from_store(store, config.statistics()))
    }

    fn from_store(store: Store, statistics: StatisticsConfig) -> Self {
        Self {
            facade: Arc::new(Facade::new(store, statistics)),
        }
    }

    fn facade(&self) -> &Facade<Store> {
        &self.facade
    }
}

fn app(app_state: AppState) -> Router {
    api::router()
        .layer(TraceLayer::new_for_http())
        .route("/health", get(health))
        .with_state(app_state)
}

async fn health(State(app_state): State<AppState>) -> api::Result<()> {
    Ok(app_state.facade().health().await?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutting down");
}
