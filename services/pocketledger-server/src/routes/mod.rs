//! Route table
//!
//! Signup, login and the health probe are public; everything else
//! sits behind the identity guard, which resolves the owner before
//! any handler runs.

mod auth;
mod budget;
mod health;
mod insights;
mod transactions;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use pocketledger_auth::GuardLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let guard = GuardLayer::new(Arc::new(state.auth.token_service().clone()));

    let protected = Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/:id",
            put(transactions::update).delete(transactions::remove),
        )
        .route("/budget", get(budget::fetch).post(budget::save))
        .route("/insights", get(insights::fetch))
        .route_layer(guard);

    Router::new()
        .route("/health", get(health::check))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
