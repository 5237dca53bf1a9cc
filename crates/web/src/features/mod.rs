use axum::extract::{path::ErrorKind, rejection::PathRejection};
use chrono::NaiveDate;
use storage::validation::{is_valid_group_name, parse_date};

use crate::error::{WebError, WebResult};
use crate::state::AppState;

pub mod classes;
pub mod groups;

/// Turns an undecodable path (e.g. `%FF`) into the envelope error for the
/// segment that failed.
pub(crate) fn path_error(rejection: PathRejection) -> WebError {
    if let PathRejection::FailedToDeserializePathParams(e) = &rejection {
        if let ErrorKind::InvalidUtf8InPathParam { key } = e.kind() {
            if key == "date" {
                return WebError::InvalidDate(rejection.body_text());
            }
        }
    }
    WebError::InvalidGroupName(rejection.body_text())
}

pub(crate) fn require_valid_group_name(group_name: &str) -> WebResult<()> {
    if is_valid_group_name(group_name) {
        Ok(())
    } else {
        Err(WebError::InvalidGroupName(group_name.to_string()))
    }
}

pub(crate) fn require_valid_date(date: &str) -> WebResult<NaiveDate> {
    parse_date(date).ok_or_else(|| WebError::InvalidDate(date.to_string()))
}

/// Probes for the group so that class queries never run for unknown names
pub(crate) async fn require_existing_group(state: &AppState, group_name: &str) -> WebResult<()> {
    if state.bounded(state.store().group_exists(group_name)).await? {
        Ok(())
    } else {
        Err(WebError::GroupNotFound(group_name.to_string()))
    }
}
