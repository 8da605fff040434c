//! # Gymtrack API
//!
//! HTTP collaborator surface over the session core: bearer-token
//! extraction plus the login/logout and gyma start/end handlers. Lib-only;
//! the host application builds the pool, store, service, and a real
//! credential provider, then mounts [`router`].

pub mod extract;
pub mod handlers;
pub mod response;
pub mod state;

use axum::routing::{post, put};
use axum::Router;
use gymtrack_core::SessionStore;
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn router<S: SessionStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(handlers::auth::login::<S>))
        .route("/api/v1/auth/logout", post(handlers::auth::logout::<S>))
        .route("/api/v1/gyma/start", post(handlers::gyma::start_gyma::<S>))
        .route("/api/v1/gyma/end", put(handlers::gyma::end_gyma::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
