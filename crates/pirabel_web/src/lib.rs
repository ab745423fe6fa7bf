use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route(
            "/api/session",
            post(handlers::login).get(handlers::current_user).delete(handlers::logout),
        )
        .route("/api/audit", post(handlers::audit))
        .route("/api/keywords", post(handlers::keywords))
        .route("/api/articles", post(handlers::article))
        .route("/api/plans", get(handlers::plans))
        .route("/api/dashboard", get(handlers::dashboard))
        .route("/api/ranks", get(handlers::ranks))
        .route("/api/admin/stats", get(handlers::admin_stats))
        .route("/api/admin/accounts", get(handlers::admin_accounts))
        .route("/api/i18n/:lang", get(handlers::translations))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> pirabel_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, ApiError, AppState};
    pub use pirabel_core::{Error, Result};
}
