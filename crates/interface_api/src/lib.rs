//! HTTP API Layer
//!
//! This crate exposes the customer registry over JSON/HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One per registry operation plus health
//! - **Extractors**: Operation metadata from request headers, JSON bodies
//!   with uniform rejections
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Registry error categories mapped to statuses
//!
//! # Routes
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/health` | repository health |
//! | GET | `/api/v1/customers/:id` | get |
//! | POST | `/api/v1/customers` | create |
//! | PUT | `/api/v1/customers/:id/info` | update info |
//! | PUT | `/api/v1/customers/:id/state` | set state |
//! | PUT | `/api/v1/customers/:id/details` | update details |
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(service), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_customer::RegistryService;

use crate::config::ApiConfig;
use crate::handlers::{customer, health};
use crate::middleware::access_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RegistryService>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Registry service backed by the chosen repository
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: Arc<RegistryService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Customer routes
    let customer_routes = Router::new()
        .route("/", post(customer::create_customer))
        .route("/:id", get(customer::get_customer))
        .route("/:id/info", put(customer::update_info))
        .route("/:id/state", put(customer::set_state))
        .route("/:id/details", put(customer::update_details));

    let api_routes = Router::new()
        .nest("/customers", customer_routes)
        .layer(axum_middleware::from_fn(access_log_middleware));

    // Combine all routes; the request id is set before tracing sees the request
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
