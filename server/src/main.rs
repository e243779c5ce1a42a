mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if config.api_base_url.is_none() {
        tracing::warn!("API_BASE_URL not set; login and backend rewrites disabled");
    }
    if config.runtime.issuer.is_none() {
        tracing::warn!("AUTH_ISSUER not set; runtime config will expose no issuer");
    }
    let port = config.port;

    let state = state::AppState::new(config);
    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "console listening");
    axum::serve(listener, app).await.expect("server failed");
}
