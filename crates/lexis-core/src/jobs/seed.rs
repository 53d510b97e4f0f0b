use crate::models::{Locale, SeedReport, TaskDefinition, TaskType};
use crate::persistence::{PersistenceResult, TaskSeedStore};
use crate::seed::{count_matching, seed_definitions, seed_records};
use crate::sqlite::TASKS_TABLE;

pub fn seed_tasks(store: &dyn TaskSeedStore) -> PersistenceResult<SeedReport> {
    let definitions = seed_definitions()?;
    seed_tasks_from(store, &definitions)
}

/// Creates the table if needed, clears it, then inserts every definition.
///
/// Table creation and the clear are fatal. Individual insert failures are
/// logged and counted; the writes are not wrapped in a transaction, so rows
/// inserted before a failure stay in place.
pub fn seed_tasks_from(
    store: &dyn TaskSeedStore,
    definitions: &[TaskDefinition],
) -> PersistenceResult<SeedReport> {
    store.ensure_tasks_table()?;
    tracing::info!(table = TASKS_TABLE, "created or verified table");

    let cleared = store.clear_tasks()?;
    tracing::info!(table = TASKS_TABLE, cleared, "cleared existing tasks");

    for locale in Locale::ALL {
        tracing::debug!(
            locale = locale.as_str(),
            sentence = count_matching(definitions, locale, TaskType::Sentence),
            word = count_matching(definitions, locale, TaskType::Word),
            "seeding prompts"
        );
    }

    let records = seed_records(definitions);
    let failures = store.insert_tasks(&records)?;
    for failure in &failures {
        tracing::error!(
            table = TASKS_TABLE,
            task_id = %failure.task_id,
            message = %failure.message,
            "failed to insert task"
        );
    }

    let report = SeedReport {
        attempted: records.len(),
        inserted: records.len() - failures.len(),
        failures,
        stored: store.list_tasks()?.len(),
    };
    tracing::info!(
        table = TASKS_TABLE,
        inserted = report.inserted,
        failed = report.failures.len(),
        stored = report.stored,
        "inserted seed tasks"
    );
    Ok(report)
}
