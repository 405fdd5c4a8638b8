//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod registration;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root))
        .route("/items", get(list_items))
        .nest("/points", configure_point_routes())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Configura le routes dei punti di raccolta
fn configure_point_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_points).post(create_point))
        .route("/{point_id}", get(get_point))
}

/// Il frontend gira su un'altra origin
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
