/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → store 選択 → identity resolver 生成 → Router 組み立て
 * - Middleware の適用 (security headers / CORS / request-id / trace / limit / timeout)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{
    self,
    handlers::health::{fallback, health, index},
};
use crate::config::Config;
use crate::middleware;
use crate::repos::select_backend;
use crate::services::auth::build_identity_resolver;
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG wins when set. Ex:
    // RUST_LOG=info,stable_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched.
        tracing::error!(?info, "panic");

        // Development: crash loudly. Production: keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().context("failed to load configuration")?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Store selection never fails: an unusable database falls back to the volatile store.
pub async fn build_state(config: &Config) -> AppState {
    let backend = select_backend(&config.storage).await;
    let kind = backend.kind();
    let identity = build_identity_resolver(config);

    tracing::info!(storage = %kind, identity = identity.name(), "application state ready");

    AppState::new(backend.into_repo(), identity, kind)
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api", api::routes(state.clone()))
        .fallback(fallback)
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}
