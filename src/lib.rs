//! # hpkeeper - Character Hit Point Tracker
//!
//! Seeds character sheets from JSON files and serves endpoints for dealing
//! damage, healing and granting temporary hit points.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Character records and shared application state
//! - [`services`] - Hit point resolution, seeding and character storage
//! - [`utils`] - Constants and environment-driven settings

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{add_temporary_hp, deal_damage, get_character, heal, health_check};
use crate::models::AppState;
use crate::services::store::CharacterStore;

/// Creates the Axum router serving all endpoints against `store`.
///
/// Seeding is not part of building the router; callers seed the store
/// (see [`services::seeder::load_all`]) before serving.
pub fn app(store: Arc<dyn CharacterStore>) -> Router {
    let state = Arc::new(AppState::new(store));

    Router::new()
        .route("/health-check", get(health_check))
        .route("/dealDamage", post(deal_damage))
        .route("/heal", post(heal))
        .route("/addTemporaryHP", post(add_temporary_hp))
        .route("/character/{name}", get(get_character))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
