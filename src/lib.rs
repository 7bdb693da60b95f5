/// Cats API Library
///
/// An access-control layer fronting a multi-tenant resource API: cats owned
/// by users, breeds shared across users.
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `db`: Postgres pool and migrations
/// - `error`: Error taxonomy and HTTP mapping
/// - `middleware`: Authentication/authorization gates and route policies
/// - `models`: Data models
/// - `security`: Password hashing, token issue/verify
/// - `services`: Business logic (credentials, cats, breeds, ownership)
/// - `store`: Persistence interfaces and implementations
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{authentication_gate, authorization_gate, PolicyTable};
use crate::store::{BreedStore, CatStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub cats: Arc<dyn CatStore>,
    pub breeds: Arc<dyn BreedStore>,
    pub policies: Arc<PolicyTable>,
    pub config: Config,
}

/// Build the application router with the full gate chain applied.
pub fn app(state: AppState) -> Router {
    // Layers run outermost-last: the authentication gate must execute before
    // the authorization gate, so it is added after it.
    Router::new()
        .route("/health", get(health_check))
        .merge(api::routes())
        .layer(from_fn_with_state(state.clone(), authorization_gate))
        .layer(from_fn_with_state(state.clone(), authentication_gate))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
