use crate::models::{BackfillReport, FlagBackfill};
use crate::persistence::{FlagBackfillStore, PersistenceResult};
use crate::sqlite::AUDIO_FLAG;

pub fn backfill_audio_flag(store: &dyn FlagBackfillStore) -> PersistenceResult<BackfillReport> {
    backfill_flag(store, &AUDIO_FLAG)
}

/// Recomputes `plan.flag_column` for every primary row in one transaction.
/// The flag is a snapshot of the lookup table at the time of the run.
pub fn backfill_flag(
    store: &dyn FlagBackfillStore,
    plan: &FlagBackfill,
) -> PersistenceResult<BackfillReport> {
    tracing::debug!(
        table = plan.primary_table,
        column = plan.flag_column,
        lookup = plan.lookup_table,
        "starting flag backfill"
    );

    let report = store.backfill_flag(plan)?;

    if report.flag_column_added {
        tracing::info!(
            table = plan.primary_table,
            column = plan.flag_column,
            "column added"
        );
    }
    tracing::info!(
        table = plan.primary_table,
        column = plan.flag_column,
        flagged = report.flagged,
        unflagged = report.unflagged,
        "flag backfill committed"
    );
    Ok(report)
}
