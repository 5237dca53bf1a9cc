use axum::{Router, routing::get};

use super::handlers::{get_group, list_groups, replace_group};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/groups/", get(list_groups))
        .route("/api/groups", get(list_groups))
        .route("/api/groups/:group_name", get(get_group).post(replace_group))
}
