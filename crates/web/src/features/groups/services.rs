use storage::{
    error::Result,
    models::{GroupRow, GroupSchedule},
};

use crate::state::AppState;

/// List all groups without their classes
pub async fn list_groups(state: &AppState) -> Result<Vec<GroupRow>> {
    state.bounded(state.store().list_groups()).await
}

/// Get a group with its whole schedule
pub async fn get_group(state: &AppState, group_name: &str) -> Result<GroupSchedule> {
    state.bounded(state.store().get_group(group_name)).await
}

/// Replace a group and its schedule
pub async fn replace_group(state: &AppState, schedule: &GroupSchedule) -> Result<()> {
    state.bounded(state.store().replace_group(schedule)).await
}
