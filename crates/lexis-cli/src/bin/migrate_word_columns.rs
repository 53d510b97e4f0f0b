use std::process::ExitCode;

use lexis_core::jobs::migrate_word_columns;
use lexis_core::models::ColumnOutcome;

fn main() -> ExitCode {
    lexis_cli::run("lexis-migrate-word-columns", |store| {
        let report = migrate_word_columns(store);
        tracing::info!(
            added = report.count(|outcome| *outcome == ColumnOutcome::Added),
            already_present = report.count(|outcome| *outcome == ColumnOutcome::AlreadyExists),
            failed = report.count(ColumnOutcome::is_failure),
            "column migration summary"
        );
        Ok(())
    })
}
