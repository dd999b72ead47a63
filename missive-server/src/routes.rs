use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::{controllers, AppState, GRAPHQL_PATH};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(controllers::health))
        .route(GRAPHQL_PATH, get(controllers::graphql_get).post(controllers::graphql))
        .layer(Extension(state))
}
