use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::{ReplaceStage, Result, StorageError};
use crate::models::{ClassRow, GroupRow, GroupSchedule};

const CLASS_COLUMNS: &str =
    "discipline, class_type, date, time, professor, subgroup, location, comment, message";

/// Repository for the `groups` and `classes_full_time` tables
pub struct ScheduleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every group without its classes, in primary key order
    pub async fn list_groups(&self) -> Result<Vec<GroupRow>> {
        let groups = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT group_name, institute, study_level, study_form,
                   number_of_subgroups, last_update
            FROM groups
            ORDER BY group_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }

    /// Get a group and its whole schedule
    pub async fn get_group(&self, group_name: &str) -> Result<GroupSchedule> {
        let group = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT group_name, institute, study_level, study_form,
                   number_of_subgroups, last_update
            FROM groups
            WHERE group_name = $1
            "#,
        )
        .bind(group_name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        let classes = self
            .get_classes(group_name)
            .await
            .map_err(|e| match e {
                StorageError::Database(source) => StorageError::ClassQuery(source),
                e => e,
            })?;

        Ok(GroupSchedule { group, classes })
    }

    /// Classes of a group in submission order. Empty when the group is unknown.
    pub async fn get_classes(&self, group_name: &str) -> Result<Vec<ClassRow>> {
        let sql = format!(
            "SELECT {CLASS_COLUMNS} FROM classes_full_time WHERE group_name = $1 ORDER BY id"
        );
        let classes = sqlx::query_as::<_, ClassRow>(&sql)
            .bind(group_name)
            .fetch_all(self.pool)
            .await?;

        Ok(classes)
    }

    /// Classes of a group held on exactly `date`
    pub async fn get_day(&self, group_name: &str, date: NaiveDate) -> Result<Vec<ClassRow>> {
        let sql = format!(
            "SELECT {CLASS_COLUMNS} FROM classes_full_time \
             WHERE group_name = $1 AND date = $2 ORDER BY id"
        );
        let classes = sqlx::query_as::<_, ClassRow>(&sql)
            .bind(group_name)
            .bind(date)
            .fetch_all(self.pool)
            .await?;

        Ok(classes)
    }

    pub async fn group_exists(&self, group_name: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM groups WHERE group_name = $1)",
        )
        .bind(group_name)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Replace a group and all of its classes in a single transaction.
    ///
    /// Classes go away with the old group row through the cascading foreign
    /// key. Nothing is visible to other sessions until the commit, and any
    /// failure rolls the whole replacement back.
    pub async fn replace_group(&self, schedule: &GroupSchedule) -> Result<()> {
        let GroupSchedule { group, classes } = schedule;

        let mut tx = self.pool.begin().await.map_err(at(ReplaceStage::Begin))?;

        sqlx::query("DELETE FROM groups WHERE group_name = $1")
            .bind(&group.group_name)
            .execute(&mut *tx)
            .await
            .map_err(at(ReplaceStage::DeleteGroup))?;

        sqlx::query(
            r#"
            INSERT INTO groups (group_name, institute, study_level, study_form,
                                number_of_subgroups, last_update)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&group.group_name)
        .bind(&group.institute)
        .bind(&group.study_level)
        .bind(&group.study_form)
        .bind(group.number_of_subgroups)
        .bind(group.last_update)
        .execute(&mut *tx)
        .await
        .map_err(at(ReplaceStage::InsertGroup))?;

        for class in classes {
            sqlx::query(
                r#"
                INSERT INTO classes_full_time (group_name, discipline, date, time, class_type,
                                               professor, subgroup, location, comment, message)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(&group.group_name)
            .bind(&class.discipline)
            .bind(class.date)
            .bind(&class.time)
            .bind(&class.class_type)
            .bind(&class.professor)
            .bind(class.subgroup)
            .bind(&class.location)
            .bind(&class.comment)
            .bind(&class.message)
            .execute(&mut *tx)
            .await
            .map_err(at(ReplaceStage::InsertClass))?;
        }

        tx.commit().await.map_err(at(ReplaceStage::Commit))?;

        Ok(())
    }
}

fn at(stage: ReplaceStage) -> impl FnOnce(sqlx::Error) -> StorageError {
    move |source| StorageError::Replace { stage, source }
}
