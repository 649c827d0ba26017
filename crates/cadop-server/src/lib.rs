//! cadop-server — HTTP surface for the registry query service.
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/search?term=…` | 200 `{term, count, results}` | 400 short term, 500 no data |
//! | GET | `/details/{registry_id}` | 200 record | 400 undecodable id, 404 unknown id, 500 internal |
//!
//! Every response allows any origin.

pub mod cors;
pub mod handlers;
pub mod response;

use std::future::Future;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use cadop_core::QueryService;
use tokio::net::TcpListener;

/// Build the router over a shared, already loaded service.
pub fn router(service: Arc<QueryService>) -> Router {
    Router::new()
        .route("/search", get(handlers::handle_search))
        .route("/details/{registry_id}", get(handlers::handle_details))
        .layer(middleware::from_fn(cors::allow_any_origin))
        .with_state(service)
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    service: Arc<QueryService>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, records = service.len(), "listening");
    }
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}
