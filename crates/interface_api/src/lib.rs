//! HTTP API Layer
//!
//! This crate provides the REST API for the tenant statement system using
//! Axum. It is deliberately thin: handlers translate between JSON payloads
//! and the engine services in `domain_ledger`, and nothing here owns
//! business logic or mutable state.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_ledger::{ArtifactStore, StatementRenderer, StatementStore};

use crate::handlers::{charge, health, history, payment, statement};

/// Application state shared across handlers
///
/// Holds the collaborator adapters; the engine services are constructed
/// per-request from these handles, so requests share nothing but the
/// adapters' own synchronization.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StatementStore>,
    pub renderer: Arc<dyn StatementRenderer>,
    pub artifacts: Arc<dyn ArtifactStore>,
}

impl AppState {
    /// Creates the state from explicit collaborators
    pub fn new(
        store: Arc<dyn StatementStore>,
        renderer: Arc<dyn StatementRenderer>,
        artifacts: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            store,
            renderer,
            artifacts,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/payments", post(payment::record_payment))
        .route("/charges", post(charge::record_charge))
        .route("/statements", post(statement::generate_statement))
        .route("/tenants/:tenant_id/history", get(history::get_history));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
