//! Web presentation layer: routes, handlers and HTML pages.
//!
//! Routes:
//! - `GET /` index (query: `sort`, `page`, `completed`, `color`, `title`)
//! - `GET /items/new`, `POST /items` create
//! - `GET /items/{id}` details
//! - `GET|POST /items/{id}/edit` edit
//! - `GET|POST /items/{id}/delete` delete
//! - `GET /health`

pub mod controller;
pub mod forms;
pub mod handlers;
pub mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use log::info;

use crate::service::ItemService;

pub use controller::{ItemPage, ItemView, ItemsController, ListParams, SortDirection};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub controller: ItemsController,
}

impl AppState {
    pub fn new(service: Arc<dyn ItemService>, page_size: u64) -> Self {
        Self {
            controller: ItemsController::new(service, page_size),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/items", post(handlers::create))
        .route("/items/new", get(handlers::new_form))
        .route("/items/{id}", get(handlers::details))
        .route("/items/{id}/edit", get(handlers::edit_form).post(handlers::update))
        .route("/items/{id}/delete", get(handlers::delete_confirm).post(handlers::delete))
        .with_state(state)
}

/// Serve the application until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
