use crate::models::{ColumnAddition, ColumnMigrationReport, ColumnOutcome, ColumnResult};
use crate::persistence::ColumnStore;
use crate::sqlite::{WORDS_TABLE, word_columns};

pub fn migrate_word_columns(store: &dyn ColumnStore) -> ColumnMigrationReport {
    let report = apply_column_additions(store, word_columns());
    log_table_columns(store, WORDS_TABLE);
    report
}

/// Attempts every addition independently. A failed column never stops the
/// ones after it.
pub fn apply_column_additions(
    store: &dyn ColumnStore,
    additions: &[ColumnAddition],
) -> ColumnMigrationReport {
    let mut report = ColumnMigrationReport::default();

    for addition in additions {
        let outcome = match store.add_column(addition) {
            Ok(outcome) => outcome,
            Err(error) => ColumnOutcome::Failed(error.message),
        };

        match &outcome {
            ColumnOutcome::Added => tracing::info!(
                table = addition.table,
                column = addition.column,
                definition = addition.definition,
                "column added"
            ),
            ColumnOutcome::AlreadyExists => tracing::info!(
                table = addition.table,
                column = addition.column,
                "column already exists"
            ),
            ColumnOutcome::Failed(message) => tracing::error!(
                table = addition.table,
                column = addition.column,
                message = %message,
                "failed to add column"
            ),
        }

        report.columns.push(ColumnResult {
            table: addition.table,
            column: addition.column,
            outcome,
        });
    }

    report
}

fn log_table_columns(store: &dyn ColumnStore, table: &str) {
    match store.table_exists(table) {
        Ok(true) => match store.column_names(table) {
            Ok(columns) => tracing::info!(
                table,
                columns = %columns.join(", "),
                "table columns after migration"
            ),
            Err(error) => tracing::warn!(table, message = %error.message, "failed to read columns"),
        },
        Ok(false) => tracing::warn!(table, "table does not exist"),
        Err(error) => tracing::warn!(table, message = %error.message, "failed to read catalog"),
    }
}
