//! The static task prompts written into the `tasks` table.

use crate::models::{CoreError, CoreErrorKind, Locale, TaskDefinition, TaskRecord, TaskType};
use crate::persistence::PersistenceResult;

const SEED_TASKS_JSON: &str = include_str!("../assets/seed_tasks.json");

pub fn seed_definitions() -> PersistenceResult<Vec<TaskDefinition>> {
    serde_json::from_str(SEED_TASKS_JSON).map_err(|error| {
        CoreError::new(
            CoreErrorKind::InvalidInput,
            format!("embedded seed task dataset is malformed: {error}"),
        )
    })
}

/// Stamps every definition with a fresh id. Ids are not stable across calls.
pub fn seed_records(definitions: &[TaskDefinition]) -> Vec<TaskRecord> {
    definitions.iter().map(TaskRecord::from_definition).collect()
}

pub fn count_matching(
    definitions: &[TaskDefinition],
    locale: Locale,
    task_type: TaskType,
) -> usize {
    definitions
        .iter()
        .filter(|entry| entry.locale == locale && entry.task_type == task_type)
        .count()
}
