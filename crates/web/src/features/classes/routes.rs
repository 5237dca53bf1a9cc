use axum::{Router, routing::get};

use super::handlers::{get_classes, get_day};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/classes/:group_name", get(get_classes))
        .route("/api/classes/:group_name/:date", get(get_day))
}
