use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::features::{classes, groups};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        groups::handlers::list_groups,
        groups::handlers::get_group,
        groups::handlers::replace_group,
        classes::handlers::get_classes,
        classes::handlers::get_day,
    ),
    components(
        schemas(
            storage::dto::schedule::GroupSummary,
            storage::dto::schedule::GroupDetail,
            storage::dto::schedule::ClassEntry,
            storage::dto::schedule::Day,
            storage::dto::schedule::ReplaceGroupRequest,
            crate::error::SimpleResponse,
        )
    ),
    tags(
        (name = "groups", description = "Groups and their schedules"),
        (name = "classes", description = "Class lists of a group"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
