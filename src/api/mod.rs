mod auth;
mod breeds;
mod cats;

use axum::http::Method;
use axum::Router;

use crate::middleware::PolicyTable;
use crate::models::Role;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::routes())
        .nest("/cats", cats::routes())
        .nest("/breeds", breeds::routes())
}

/// The route policy table, registered alongside the routes it governs.
///
/// Cats are authenticated-only: their access control is the ownership rule
/// inside the service, which must stay reachable for admins. Breed
/// update/delete override the scope default with an admin-only operation
/// entry.
pub fn policies() -> PolicyTable {
    PolicyTable::new()
        .public_route(Method::GET, "/health")
        .public_route(Method::POST, "/auth/signup")
        .public_route(Method::POST, "/auth/login")
        .route(Method::GET, "/auth/profile", Role::User)
        .scope_role("/breeds", Role::User)
        .route(Method::PATCH, "/breeds/:id", Role::Admin)
        .route(Method::DELETE, "/breeds/:id", Role::Admin)
}
