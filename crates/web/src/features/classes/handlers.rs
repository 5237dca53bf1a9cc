use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use storage::dto::schedule::{ClassEntry, Day};

use crate::error::WebError;
use crate::features::{
    path_error, require_existing_group, require_valid_date, require_valid_group_name,
};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/classes/{group_name}",
    params(
        ("group_name" = String, Path, description = "Group name, e.g. 301 or 301а-2")
    ),
    responses(
        (status = 200, description = "Every class of the group, or an error envelope", body = Vec<ClassEntry>)
    ),
    tag = "classes"
)]
pub async fn get_classes(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(group_name) = path.map_err(path_error)?;
    require_valid_group_name(&group_name)?;
    require_existing_group(&state, &group_name).await?;

    let classes = services::get_classes(&state, &group_name)
        .await
        .map_err(WebError::classes)?;

    let response: Vec<ClassEntry> = classes.into_iter().map(ClassEntry::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/classes/{group_name}/{date}",
    params(
        ("group_name" = String, Path, description = "Group name, e.g. 301 or 301а-2"),
        ("date" = String, Path, description = "Calendar date as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Classes of the group on that date, or an error envelope", body = Day)
    ),
    tag = "classes"
)]
pub async fn get_day(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Response, WebError> {
    let Path((group_name, date)) = path.map_err(path_error)?;
    require_valid_group_name(&group_name)?;
    let day = require_valid_date(&date)?;
    require_existing_group(&state, &group_name).await?;

    let classes = services::get_day(&state, &group_name, day)
        .await
        .map_err(WebError::classes)?;

    Ok(Json(Day {
        date,
        group_name,
        classes: classes.into_iter().map(ClassEntry::from).collect(),
    })
    .into_response())
}
