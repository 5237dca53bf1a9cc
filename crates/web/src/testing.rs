//! In-memory store and request helpers for handler tests.

use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;
use storage::{
    ScheduleStore, StorageError,
    error::Result,
    models::{ClassRow, GroupRow, GroupSchedule},
};
use tower::ServiceExt;

use crate::routes;
use crate::state::AppState;

/// How the next store calls should fail
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Query,
    Decode,
    /// Only the class list of `get_group` fails to decode
    ClassDecode,
    Hang,
}

#[derive(Default)]
pub struct MemoryStore {
    groups: Mutex<BTreeMap<String, GroupSchedule>>,
    failure: Mutex<Option<Failure>>,
    class_reads: AtomicUsize,
}

impl MemoryStore {
    pub fn with_groups(schedules: Vec<GroupSchedule>) -> Self {
        let store = Self::default();
        {
            let mut groups = store.groups.lock().unwrap();
            for schedule in schedules {
                groups.insert(schedule.group.group_name.clone(), schedule);
            }
        }
        store
    }

    pub fn fail_with(&self, failure: Failure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Number of class list queries that reached the store
    pub fn class_reads(&self) -> usize {
        self.class_reads.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> BTreeMap<String, GroupSchedule> {
        self.groups.lock().unwrap().clone()
    }

    async fn check(&self) -> Result<()> {
        let failure = *self.failure.lock().unwrap();
        match failure {
            None | Some(Failure::ClassDecode) => Ok(()),
            Some(Failure::Query) => Err(StorageError::Database(sqlx::Error::PoolTimedOut)),
            Some(Failure::Decode) => Err(StorageError::Database(sqlx::Error::ColumnDecode {
                index: "date".to_string(),
                source: "unexpected value".into(),
            })),
            Some(Failure::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn list_groups(&self) -> Result<Vec<GroupRow>> {
        self.check().await?;
        let groups = self.groups.lock().unwrap();
        Ok(groups.values().map(|s| s.group.clone()).collect())
    }

    async fn get_group(&self, group_name: &str) -> Result<GroupSchedule> {
        self.check().await?;
        if matches!(*self.failure.lock().unwrap(), Some(Failure::ClassDecode)) {
            return Err(StorageError::ClassQuery(sqlx::Error::ColumnNotFound(
                "date".to_string(),
            )));
        }
        let groups = self.groups.lock().unwrap();
        groups.get(group_name).cloned().ok_or(StorageError::NotFound)
    }

    async fn get_classes(&self, group_name: &str) -> Result<Vec<ClassRow>> {
        self.class_reads.fetch_add(1, Ordering::SeqCst);
        self.check().await?;
        let groups = self.groups.lock().unwrap();
        Ok(groups
            .get(group_name)
            .map(|s| s.classes.clone())
            .unwrap_or_default())
    }

    async fn get_day(&self, group_name: &str, date: NaiveDate) -> Result<Vec<ClassRow>> {
        self.class_reads.fetch_add(1, Ordering::SeqCst);
        self.check().await?;
        let groups = self.groups.lock().unwrap();
        Ok(groups
            .get(group_name)
            .map(|s| s.classes.iter().filter(|c| c.date == date).cloned().collect())
            .unwrap_or_default())
    }

    async fn group_exists(&self, group_name: &str) -> Result<bool> {
        self.check().await?;
        Ok(self.groups.lock().unwrap().contains_key(group_name))
    }

    async fn replace_group(&self, schedule: &GroupSchedule) -> Result<()> {
        self.check().await?;
        self.groups
            .lock()
            .unwrap()
            .insert(schedule.group.group_name.clone(), schedule.clone());
        Ok(())
    }
}

pub fn class(discipline: &str, date: NaiveDate) -> ClassRow {
    ClassRow {
        discipline: discipline.to_string(),
        class_type: "Лекция".to_string(),
        date,
        time: "08:30-10:00".to_string(),
        professor: "Петров П.П.".to_string(),
        subgroup: 0,
        location: "Б-204".to_string(),
        comment: String::new(),
        message: String::new(),
    }
}

pub fn sept(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
}

/// Group 301 with Math on 2024-09-01 and Physics on 2024-09-02
pub fn group_301() -> GroupSchedule {
    GroupSchedule {
        group: GroupRow {
            group_name: "301".to_string(),
            institute: "ИМИТ".to_string(),
            study_level: "Бакалавриат".to_string(),
            study_form: "Очная".to_string(),
            number_of_subgroups: 2,
            last_update: Utc.with_ymd_and_hms(2024, 8, 30, 9, 0, 0).unwrap(),
        },
        classes: vec![class("Math", sept(1)), class("Physics", sept(2))],
    }
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    routes::router(AppState::new(store, Duration::from_millis(200)))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub fn assert_failure(body: &Value, code: &str) {
    assert_eq!(body["successful"], false, "body: {body}");
    assert_eq!(body["error"], code, "body: {body}");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}
