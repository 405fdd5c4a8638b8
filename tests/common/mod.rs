use axum_test::TestServer;
use ecopoint_server::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Base URL usato dai test per gli `image_url`
pub const TEST_PUBLIC_URL: &str = "http://localhost:3333";

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite isolato, creato da `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, TEST_PUBLIC_URL.to_string()))
}

/// Crea un TestServer pronto per eseguire richieste
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = ecopoint_server::create_router(create_test_state(pool));
    TestServer::new(app).expect("Failed to create test server")
}
