use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use storage::error::StorageError;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Envelope returned for every failure and for successful writes.
///
/// Clients branch on `successful` and `error`; the HTTP status is always 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimpleResponse {
    pub successful: bool,
    /// Machine readable code, empty on success
    pub error: String,
    /// Localized human readable text
    pub message: String,
}

impl SimpleResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            successful: true,
            error: String::new(),
            message: message.into(),
        }
    }

    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            successful: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for SimpleResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// What a failed store call was producing, used to pick the scan message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Group,
    Classes,
}

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    InvalidGroupName(String),
    InvalidDate(String),
    GroupNotFound(String),
    BodyRead(String),
    Validation(ValidationErrors),
    Storage {
        error: StorageError,
        resource: Resource,
    },
}

impl WebError {
    /// Store failure while reading or writing a class list
    pub fn classes(error: StorageError) -> Self {
        Self::Storage {
            error,
            resource: Resource::Classes,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGroupName(_) => "invalid_groupName",
            Self::InvalidDate(_) => "invalid_date",
            Self::GroupNotFound(_) => "groupName_does_not_exist",
            Self::BodyRead(_) | Self::Validation(_) => "body_read_error",
            Self::Storage { error, .. } if error.is_decode_error() => "result_scan_error",
            Self::Storage { .. } => "db_query_error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidGroupName(_) => "Некорректное название группы.",
            Self::InvalidDate(_) => "Некорректная дата.",
            Self::GroupNotFound(_) => "Группа не существует.",
            Self::BodyRead(_) | Self::Validation(_) => "Ошибка при чтении запроса.",
            Self::Storage { error, resource } if error.is_decode_error() => match resource {
                Resource::Group => "Ошибка при формировании группы.",
                Resource::Classes => "Ошибка при формировании списка занятий.",
            },
            Self::Storage { .. } => "Ошибка при выполнении запроса к БД.",
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGroupName(name) => write!(f, "Invalid group name: {:?}", name),
            Self::InvalidDate(date) => write!(f, "Invalid date: {:?}", date),
            Self::GroupNotFound(name) => write!(f, "Group does not exist: {:?}", name),
            Self::BodyRead(msg) => write!(f, "Unreadable request body: {}", msg),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Storage { error, .. } => write!(f, "Storage error: {}", error),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage { error, .. } => tracing::error!("Storage error: {:?}", error),
            _ => tracing::warn!("{}", self),
        }

        SimpleResponse::failure(self.code(), self.message()).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        let resource = if error.concerns_classes() {
            Resource::Classes
        } else {
            Resource::Group
        };
        Self::Storage { error, resource }
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
