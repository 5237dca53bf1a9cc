use std::time::Duration;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::features::{classes, groups};
use crate::openapi;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(groups::routes())
        .merge(classes::routes())
        .merge(openapi::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
