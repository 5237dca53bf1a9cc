use std::fmt;

use thiserror::Error;

/// Step of a schedule replacement that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceStage {
    Begin,
    DeleteGroup,
    InsertGroup,
    InsertClass,
    Commit,
}

impl fmt::Display for ReplaceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Begin => "begin transaction",
            Self::DeleteGroup => "delete group",
            Self::InsertGroup => "insert group",
            Self::InsertClass => "insert class",
            Self::Commit => "commit transaction",
        };
        f.write_str(stage)
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to {stage}: {source}")]
    Replace {
        stage: ReplaceStage,
        #[source]
        source: sqlx::Error,
    },

    /// The group row loaded but its class list did not
    #[error("Failed to load classes: {0}")]
    ClassQuery(#[source] sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Query timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the query ran but a returned row could not be mapped onto
    /// the expected shape.
    pub fn is_decode_error(&self) -> bool {
        let source = match self {
            StorageError::Database(e) | StorageError::ClassQuery(e) => e,
            _ => return false,
        };
        matches!(
            source,
            sqlx::Error::ColumnDecode { .. }
                | sqlx::Error::ColumnNotFound(_)
                | sqlx::Error::ColumnIndexOutOfBounds { .. }
                | sqlx::Error::Decode(_)
                | sqlx::Error::TypeNotFound { .. }
        )
    }

    /// True when the failure happened while reading a class list
    pub fn concerns_classes(&self) -> bool {
        matches!(self, StorageError::ClassQuery(_))
    }
}
