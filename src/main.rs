use std::path::PathBuf;
use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, routing::post, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod error;
pub mod middleware;
pub mod modules;
pub mod types;

use crate::config::Config;
use crate::modules::notes::api::*;
use crate::modules::notes::service::NoteService;
use crate::modules::notes::store::NoteStore;
use crate::types::AppState;

pub fn app(state: AppState, public_dir: PathBuf, cors_permissive: bool) -> Router {
    let notes = Router::new()
        .route("/", get(get_notes))
        .route("/notes/add", get(add_note))
        .route("/notes/save", post(save_note))
        .route("/notes/edit/:id", get(edit_note))
        .route("/notes/update/:id", post(update_note))
        .route("/notes/delete/:id", get(delete_note).post(delete_note))
        .with_state(state);

    let app = Router::new()
        .merge(notes)
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(from_fn(crate::middleware::logging::log_requests));

    if cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(NoteStore::seeded());
    tracing::debug!(notes = store.len(), "note store seeded");
    let state = AppState::new(NoteService::new(store));

    let app = app(state, config.public_dir.clone(), config.cors_permissive);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        public_dir = %config.public_dir.display(),
        "listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
