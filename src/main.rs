use projects_api::{app, app_state::AppState, config};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();

    let state = AppState::connect(&config.database_url)
        .await
        .unwrap_or_else(|e| panic!("failed to open database {}: {}", config.database_url, e));

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("projects server listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.expect("server");
}
