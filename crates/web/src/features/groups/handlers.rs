use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    StorageError,
    dto::schedule::{GroupDetail, GroupSummary, ReplaceGroupRequest},
};
use validator::Validate;

use crate::error::{SimpleResponse, WebError};
use crate::features::{path_error, require_valid_group_name};
use crate::state::AppState;

use super::services;

const REPLACED_MESSAGE: &str = "Расписание группы успешно внесено в БД.";

#[utoipa::path(
    get,
    path = "/api/groups/",
    responses(
        (status = 200, description = "All groups without their classes, or an error envelope", body = Vec<GroupSummary>)
    ),
    tag = "groups"
)]
pub async fn list_groups(State(state): State<AppState>) -> Result<Response, WebError> {
    let groups = services::list_groups(&state).await?;

    let response: Vec<GroupSummary> = groups.into_iter().map(GroupSummary::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_name}",
    params(
        ("group_name" = String, Path, description = "Group name, e.g. 301 or 301а-2")
    ),
    responses(
        (status = 200, description = "Group with its classes, or an error envelope", body = GroupDetail)
    ),
    tag = "groups"
)]
pub async fn get_group(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(group_name) = path.map_err(path_error)?;
    require_valid_group_name(&group_name)?;

    let schedule = services::get_group(&state, &group_name)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::GroupNotFound(group_name.clone()),
            e => WebError::from(e),
        })?;

    Ok(Json(GroupDetail::from(schedule)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_name}",
    params(
        ("group_name" = String, Path, description = "Group name, e.g. 301 or 301а-2")
    ),
    request_body = ReplaceGroupRequest,
    responses(
        (status = 200, description = "Success or error envelope", body = SimpleResponse)
    ),
    tag = "groups"
)]
pub async fn replace_group(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, WebError> {
    let Path(group_name) = path.map_err(path_error)?;
    require_valid_group_name(&group_name)?;

    let body = body.map_err(|e| WebError::BodyRead(e.body_text()))?;
    let req: ReplaceGroupRequest =
        serde_json::from_slice(&body).map_err(|e| WebError::BodyRead(e.to_string()))?;

    if !req.group_name.is_empty() && req.group_name != group_name {
        return Err(WebError::InvalidGroupName(req.group_name));
    }
    req.validate()?;

    let schedule = req.into_schedule(&group_name, Utc::now());
    services::replace_group(&state, &schedule)
        .await
        .map_err(WebError::classes)?;

    tracing::info!(
        "Replaced schedule of group {} ({} classes)",
        group_name,
        schedule.classes.len()
    );

    Ok(SimpleResponse::success(REPLACED_MESSAGE).into_response())
}
