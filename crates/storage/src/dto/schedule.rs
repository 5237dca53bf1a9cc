use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ClassRow, GroupRow, GroupSchedule};
use crate::validation::parse_date;

/// Group without its class list, as returned by the group listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub group_name: String,
    pub number_of_subgroups: i32,
    pub last_update: DateTime<Utc>,
    pub institute: String,
    pub study_level: String,
    pub study_form: String,
}

/// Group with every scheduled class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    pub group_name: String,
    pub number_of_subgroups: i32,
    pub last_update: DateTime<Utc>,
    pub institute: String,
    pub study_level: String,
    pub study_form: String,
    pub classes: Vec<ClassEntry>,
}

/// A single scheduled session.
///
/// `date` is written as `YYYY-MM-DD`. On input a full RFC 3339 timestamp is
/// accepted as well and only its calendar date is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    #[serde(default)]
    pub discipline: String,

    #[serde(default)]
    pub class_type: String,

    #[serde(deserialize_with = "deserialize_class_date")]
    pub date: NaiveDate,

    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub professor: String,

    /// 0 means the whole group
    #[serde(default)]
    #[validate(range(min = 0, message = "subgroup must not be negative"))]
    pub subgroup: i32,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub message: String,
}

/// Classes of one group on one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[schema(example = "2024-09-01")]
    pub date: String,
    pub group_name: String,
    pub classes: Vec<ClassEntry>,
}

/// Request payload replacing a group's whole schedule.
///
/// Unknown fields are ignored and missing ones fall back to empty strings,
/// zero and an empty class list. A missing `lastUpdate` is filled in with
/// the time of the write.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplaceGroupRequest {
    /// Optional; when present it must match the group being replaced
    pub group_name: String,

    #[validate(range(min = 0, message = "numberOfSubgroups must not be negative"))]
    pub number_of_subgroups: i32,

    pub last_update: Option<DateTime<Utc>>,

    pub institute: String,

    pub study_level: String,

    pub study_form: String,

    #[validate(nested)]
    pub classes: Vec<ClassEntry>,
}

impl ReplaceGroupRequest {
    /// Builds the rows to store under `group_name`, stamping `now` when the
    /// payload carries no `lastUpdate`.
    pub fn into_schedule(self, group_name: &str, now: DateTime<Utc>) -> GroupSchedule {
        GroupSchedule {
            group: GroupRow {
                group_name: group_name.to_string(),
                institute: self.institute,
                study_level: self.study_level,
                study_form: self.study_form,
                number_of_subgroups: self.number_of_subgroups,
                last_update: self.last_update.unwrap_or(now),
            },
            classes: self.classes.into_iter().map(ClassRow::from).collect(),
        }
    }
}

fn deserialize_class_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    if let Some(date) = parse_date(&text) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(&text)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| serde::de::Error::custom(format!("invalid class date: {text:?}")))
}

impl From<GroupRow> for GroupSummary {
    fn from(row: GroupRow) -> Self {
        Self {
            group_name: row.group_name,
            number_of_subgroups: row.number_of_subgroups,
            last_update: row.last_update,
            institute: row.institute,
            study_level: row.study_level,
            study_form: row.study_form,
        }
    }
}

impl From<GroupSchedule> for GroupDetail {
    fn from(schedule: GroupSchedule) -> Self {
        let GroupSchedule { group, classes } = schedule;
        Self {
            group_name: group.group_name,
            number_of_subgroups: group.number_of_subgroups,
            last_update: group.last_update,
            institute: group.institute,
            study_level: group.study_level,
            study_form: group.study_form,
            classes: classes.into_iter().map(ClassEntry::from).collect(),
        }
    }
}

impl From<ClassRow> for ClassEntry {
    fn from(row: ClassRow) -> Self {
        Self {
            discipline: row.discipline,
            class_type: row.class_type,
            date: row.date,
            time: row.time,
            professor: row.professor,
            subgroup: row.subgroup,
            location: row.location,
            comment: row.comment,
            message: row.message,
        }
    }
}

impl From<ClassEntry> for ClassRow {
    fn from(entry: ClassEntry) -> Self {
        Self {
            discipline: entry.discipline,
            class_type: entry.class_type,
            date: entry.date,
            time: entry.time,
            professor: entry.professor,
            subgroup: entry.subgroup,
            location: entry.location,
            comment: entry.comment,
            message: entry.message,
        }
    }
}
