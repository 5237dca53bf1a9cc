use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Database;
use crate::error::Result;
use crate::models::{ClassRow, GroupRow, GroupSchedule};
use crate::repository::schedule::ScheduleRepository;

/// Everything the HTTP layer needs from persistent storage.
///
/// Callers validate group names and dates before reaching the store, and
/// `get_classes`/`get_day` trust the caller to have checked that the group
/// exists: both simply return an empty list for an unknown group.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn list_groups(&self) -> Result<Vec<GroupRow>>;

    /// Fails with [`StorageError::NotFound`](crate::StorageError::NotFound)
    /// when no group has this name.
    async fn get_group(&self, group_name: &str) -> Result<GroupSchedule>;

    async fn get_classes(&self, group_name: &str) -> Result<Vec<ClassRow>>;

    async fn get_day(&self, group_name: &str, date: NaiveDate) -> Result<Vec<ClassRow>>;

    async fn group_exists(&self, group_name: &str) -> Result<bool>;

    /// Atomically swaps the stored group and classes for `schedule`.
    async fn replace_group(&self, schedule: &GroupSchedule) -> Result<()>;
}

#[async_trait]
impl ScheduleStore for Database {
    async fn list_groups(&self) -> Result<Vec<GroupRow>> {
        ScheduleRepository::new(self.pool()).list_groups().await
    }

    async fn get_group(&self, group_name: &str) -> Result<GroupSchedule> {
        ScheduleRepository::new(self.pool()).get_group(group_name).await
    }

    async fn get_classes(&self, group_name: &str) -> Result<Vec<ClassRow>> {
        ScheduleRepository::new(self.pool())
            .get_classes(group_name)
            .await
    }

    async fn get_day(&self, group_name: &str, date: NaiveDate) -> Result<Vec<ClassRow>> {
        ScheduleRepository::new(self.pool())
            .get_day(group_name, date)
            .await
    }

    async fn group_exists(&self, group_name: &str) -> Result<bool> {
        ScheduleRepository::new(self.pool())
            .group_exists(group_name)
            .await
    }

    async fn replace_group(&self, schedule: &GroupSchedule) -> Result<()> {
        ScheduleRepository::new(self.pool())
            .replace_group(schedule)
            .await
    }
}
