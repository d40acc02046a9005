/*
 * Responsibility
 * - Config読み込み → tracing 初期化 → Router 組み立て
 * - Middleware の適用 (ApiKey / request id / trace など)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::{
    api,
    config::{AppEnv, Config, HttpLimits},
    error::AppError,
    middleware,
    state::AppState,
};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.app_env);

    let state = AppState::new();
    let app = build_router(state, config.http);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, env = ?config.app_env, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Full application router: `/api/v1` + fallback + HTTP-level middleware.
pub fn build_router(state: AppState, limits: HttpLimits) -> Router {
    let app = Router::new()
        .nest("/api/v1", api::v1::routes())
        .fallback(|| async { AppError::not_found("route") })
        .with_state(state);

    middleware::http::apply(app, limits)
}

fn init_tracing(app_env: AppEnv) {
    let default_filter = if app_env.is_production() {
        "info"
    } else {
        "debug,hyper=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // No signal handler: keep serving until the process is killed.
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
