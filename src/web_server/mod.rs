use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::shared::state::AppState;

async fn index() -> &'static str {
    "welcome to my todo app"
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The full application router: welcome route, task API, CORS and request
/// tracing.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(crate::tasks::configure_task_routes())
        .with_state(state)
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
}
