//! Go data type catalog HTTP server.
//!
//! Serves the catalog from [`gotypes_catalog`] as a single JSON document on
//! [`routes::catalog::CATALOG_PATH`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{Args, ServerConfig};
pub use error::ServerError;
pub use routes::catalog::CATALOG_PATH;
pub use state::AppState;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::catalog::routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Bind the listening socket for `config`.
pub async fn bind(config: &ServerConfig) -> error::Result<TcpListener> {
    let addr = config.listen_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve requests on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> error::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
