//! # daylog-server
//!
//! HTTP surface of daylog. Every route lives under `/api`; anything else
//! falls through to the optional static UI directory.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api/health` | [`routes::health::health`] |
//! | GET, POST | `/api/types` | [`routes::types`] |
//! | GET, POST | `/api/entries` | [`routes::entries`] |
//! | GET | `/api/entries/grouped` | [`routes::entries::grouped`] |
//! | GET, PUT, DELETE | `/api/entries/{id}` | [`routes::entries`] |
//! | GET, POST | `/api/vocabulary` | [`routes::vocabulary`] |

pub mod error;
pub mod routes;
pub mod shutdown;
pub mod state;

use std::sync::Arc;

use axum::Router;
use daylog_config::ServerConfig;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router.
pub fn router(state: Arc<AppState>, server: &ServerConfig) -> Router {
    let mut app = Router::new().nest("/api", routes::api());

    if server.serves_static() {
        app = app.fallback_service(ServeDir::new(&server.static_dir));
    }

    let mut app = app
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http());

    if server.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(state)
}
