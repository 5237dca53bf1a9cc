use chrono::NaiveDate;
use storage::{error::Result, models::ClassRow};

use crate::state::AppState;

pub async fn get_classes(state: &AppState, group_name: &str) -> Result<Vec<ClassRow>> {
    state.bounded(state.store().get_classes(group_name)).await
}

pub async fn get_day(state: &AppState, group_name: &str, date: NaiveDate) -> Result<Vec<ClassRow>> {
    state.bounded(state.store().get_day(group_name, date)).await
}
