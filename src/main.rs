use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

mod env_utils;
mod link_extractor;
mod route_handlers;
mod ticket_message;
mod trengo_api_service;

pub struct AppState {
    config: env_utils::Config,
}
type SharedAppState = Arc<AppState>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    debug!("initializing app state ...");

    let state = Arc::new(AppState {
        config: env_utils::Config::from_env(),
    });

    let port = crate::env_utils::get_port();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    info!("Starting server on port {}", port);

    axum::Server::bind(&addr)
        .serve(get_main_router().with_state(state).into_make_service())
        .await
        .context("error while starting API server")?;

    anyhow::Ok(())
}

/**
 * main router for the app, defines the webhook event route and healthcheck
 **/
fn get_main_router() -> Router<SharedAppState> {
    debug!("initializing router(s) ...");

    Router::new()
        .route(
            "/wh/ticket-message",
            post(route_handlers::webhook::handler),
        )
        .route("/healthcheck", get(|| async { "Ok" }))
        .layer(TraceLayer::new_for_http())
}
