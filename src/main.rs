mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let state = state::AppState::seeded();

    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.listen_addr(), static_dir = %config.static_dir.display(), "mergington listening");
    axum::serve(listener, app).await.expect("server failed");
}
