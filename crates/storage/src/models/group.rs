use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of the `groups` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GroupRow {
    pub group_name: String,
    pub institute: String,
    pub study_level: String,
    pub study_form: String,
    pub number_of_subgroups: i32,
    pub last_update: DateTime<Utc>,
}
