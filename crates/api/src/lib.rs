//! HTTP API for the demo service.
//!
//! Exposes a plain-text welcome message at `/` and the health status at
//! `/health`, with structured logging through `tracing`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use health::{HealthService, StaticHealthService};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Shared application state accessible from all handlers.
pub struct AppState<H: HealthService> {
    pub health_service: H,
}

impl<H: HealthService> AppState<H> {
    /// Creates application state around the given health service.
    pub fn new(health_service: H) -> Self {
        Self { health_service }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<H: HealthService + 'static>(state: Arc<AppState<H>>) -> Router {
    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::check::<H>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by [`StaticHealthService`].
pub fn create_default_state() -> Arc<AppState<StaticHealthService>> {
    Arc::new(AppState::new(StaticHealthService::new()))
}

/// Binds the configured address and serves the default application until
/// `shutdown` resolves.
pub async fn run<F>(config: &Config, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, create_app(create_default_state()), shutdown).await
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(addr = %local_addr, "starting API server");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
