use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of the `classes_full_time` table, minus the owning group and
/// the surrogate ordering key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassRow {
    pub discipline: String,
    pub class_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub professor: String,
    pub subgroup: i32,
    pub location: String,
    pub comment: String,
    pub message: String,
}
