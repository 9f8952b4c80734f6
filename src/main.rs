use rollcall::{init_tracing, routes, AppConfig, AppState, StudentStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().expect("invalid configuration");

    let store = StudentStore::connect(&config)
        .await
        .expect("failed to connect to the student database");
    store
        .initialize()
        .await
        .expect("failed to ensure the students table");
    tracing::info!(url = %config.database_url, "student store ready");

    let app = routes::router(AppState { store });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.listen_addr));
    tracing::info!(addr = %config.listen_addr, "listening");

    axum::serve(listener, app).await.expect("server error");
}
