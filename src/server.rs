//! HTTP server exposing the catalog retrieval endpoint.

use crate::catalog::{CatalogSource, Product};
use crate::error::CatalogError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Shared, read-only catalog handed to every request.
pub type AppState = Arc<dyn CatalogSource>;

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        error!("Catalog retrieval failed: {}", err);
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// Builds the application router.
pub fn router(catalog: AppState) -> Router {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

/// Serves the router on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    catalog: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Server running on http://{}", addr);
    info!("   GET /api/products - full catalog");
    info!("   GET /health       - health check");

    axum::serve(listener, router(catalog)).with_graceful_shutdown(shutdown).await?;

    info!("Server stopped");
    Ok(())
}

async fn list_products(State(catalog): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = catalog.all_products().await?;
    debug!("Serving {} products", products.len());
    Ok(Json(products))
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn not_found() -> ApiError {
    ApiError { status: StatusCode::NOT_FOUND, message: "not found".to_string() }
}
