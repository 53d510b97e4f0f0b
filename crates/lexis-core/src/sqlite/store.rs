use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, params};

use crate::models::{
    BackfillReport, ColumnAddition, ColumnOutcome, CoreError, CoreErrorKind, FlagBackfill,
    InsertFailure, Locale, TaskId, TaskRecord, TaskType,
};
use crate::persistence::{ColumnStore, FlagBackfillStore, PersistenceResult, TaskSeedStore};
use crate::sqlite::schema::{CREATE_TASKS_TABLE_SQL, TASKS_TABLE};

pub struct SqliteStore {
    database_path: PathBuf,
}

impl SqliteStore {
    /// Opens an existing database file. The file is never created here; a
    /// missing or unreadable database is an `OpenFailure`.
    pub fn open(database_path: impl Into<PathBuf>) -> PersistenceResult<Self> {
        let store = Self {
            database_path: database_path.into(),
        };

        let probe = open_connection(&store.database_path).and_then(|connection| {
            connection.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
                row.get::<_, i64>(0)
            })
        });
        if let Err(error) = probe {
            return Err(CoreError::new(
                CoreErrorKind::OpenFailure,
                format!(
                    "unable to open database at '{}': {error}",
                    store.database_path.display()
                ),
            ));
        }

        Ok(store)
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    fn with_connection<T>(
        &self,
        operation_name: &str,
        operation: impl FnOnce(&mut Connection) -> rusqlite::Result<T>,
    ) -> PersistenceResult<T> {
        let mut connection = open_connection(&self.database_path)
            .map_err(|error| storage_error(operation_name, error))?;
        operation(&mut connection).map_err(|error| storage_error(operation_name, error))
    }
}

impl TaskSeedStore for SqliteStore {
    fn ensure_tasks_table(&self) -> PersistenceResult<()> {
        self.with_connection("ensure_tasks_table", |connection| {
            connection.execute_batch(CREATE_TASKS_TABLE_SQL)
        })
        .map_err(|error| error.with_table(TASKS_TABLE))
    }

    fn clear_tasks(&self) -> PersistenceResult<usize> {
        self.with_connection("clear_tasks", |connection| {
            connection.execute("DELETE FROM tasks", [])
        })
        .map_err(|error| error.with_table(TASKS_TABLE))
    }

    fn insert_tasks(&self, tasks: &[TaskRecord]) -> PersistenceResult<Vec<InsertFailure>> {
        self.with_connection("insert_tasks", |connection| {
            let mut statement = connection.prepare(
                "
INSERT INTO tasks (id, description, locale, task_type)
VALUES (?1, ?2, ?3, ?4)
",
            )?;

            let mut failures = Vec::new();
            for task in tasks {
                let inserted = statement.execute(params![
                    task.id.as_str(),
                    task.description.as_str(),
                    task.locale.as_str(),
                    task.task_type.as_str(),
                ]);
                if let Err(error) = inserted {
                    failures.push(InsertFailure {
                        task_id: task.id.clone(),
                        message: error.to_string(),
                    });
                }
            }
            Ok(failures)
        })
        .map_err(|error| error.with_table(TASKS_TABLE))
    }

    fn list_tasks(&self) -> PersistenceResult<Vec<TaskRecord>> {
        self.with_connection("list_tasks", |connection| {
            let mut statement = connection.prepare(
                "
SELECT id, description, locale, task_type
FROM tasks
ORDER BY rowid
",
            )?;
            let rows = statement.query_map([], |row| {
                let id: String = row.get(0)?;
                let description: String = row.get(1)?;
                let locale_raw: String = row.get(2)?;
                let task_type_raw: String = row.get(3)?;

                Ok(TaskRecord {
                    id: TaskId(id),
                    description,
                    locale: parse_locale(&locale_raw)?,
                    task_type: parse_task_type(&task_type_raw)?,
                })
            })?;

            rows.collect::<rusqlite::Result<Vec<_>>>()
        })
        .map_err(|error| error.with_table(TASKS_TABLE))
    }
}

impl ColumnStore for SqliteStore {
    fn table_exists(&self, table: &str) -> PersistenceResult<bool> {
        self.with_connection("table_exists", |connection| {
            table_exists_in(connection, table)
        })
    }

    fn column_names(&self, table: &str) -> PersistenceResult<Vec<String>> {
        self.with_connection("column_names", |connection| {
            let mut statement =
                connection.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
            let rows = statement.query_map([table], |row| row.get::<_, String>(0))?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })
    }

    fn add_column(&self, addition: &ColumnAddition) -> PersistenceResult<ColumnOutcome> {
        self.with_connection("add_column", |connection| {
            add_column_in(connection, addition)
        })
        .map_err(|error| error.with_table(addition.table))
    }
}

impl FlagBackfillStore for SqliteStore {
    fn backfill_flag(&self, plan: &FlagBackfill) -> PersistenceResult<BackfillReport> {
        self.with_connection("backfill_flag", |connection| {
            let transaction = connection.transaction()?;

            for table in [plan.primary_table, plan.lookup_table] {
                if !table_exists_in(&transaction, table)? {
                    return Err(storage_error_sqlite(&format!(
                        "table '{table}' does not exist"
                    )));
                }
            }

            let flag_column_added =
                add_column_in(&transaction, &plan.flag_column_addition())? == ColumnOutcome::Added;

            let keys: Vec<Value> = {
                let mut statement = transaction.prepare(&format!(
                    "SELECT {} FROM {}",
                    quote_identifier(plan.primary_key),
                    quote_identifier(plan.primary_table),
                ))?;
                let rows = statement.query_map([], |row| row.get::<_, Value>(0))?;
                rows.collect::<rusqlite::Result<_>>()?
            };

            let mut report = BackfillReport {
                flag_column_added,
                ..BackfillReport::default()
            };
            {
                let mut lookup = transaction.prepare(&format!(
                    "SELECT EXISTS (SELECT 1 FROM {} WHERE {} = ?1)",
                    quote_identifier(plan.lookup_table),
                    quote_identifier(plan.lookup_key),
                ))?;
                let mut update = transaction.prepare(&format!(
                    "UPDATE {} SET {} = ?2 WHERE {} = ?1",
                    quote_identifier(plan.primary_table),
                    quote_identifier(plan.flag_column),
                    quote_identifier(plan.primary_key),
                ))?;

                for key in &keys {
                    let present: bool = lookup.query_row([key], |row| row.get(0))?;
                    update.execute(params![key, bool_to_sqlite(present)])?;
                    if present {
                        report.flagged += 1;
                    } else {
                        report.unflagged += 1;
                    }
                }
            }

            transaction.commit()?;
            Ok(report)
        })
        .map_err(|error| error.with_table(plan.primary_table))
    }
}

fn open_connection(database_path: &Path) -> rusqlite::Result<Connection> {
    Connection::open_with_flags(
        database_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

fn table_exists_in(connection: &Connection, table: &str) -> rusqlite::Result<bool> {
    connection.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )
}

fn column_exists_in(connection: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    connection.query_row(
        "SELECT COUNT(*) > 0 FROM pragma_table_info(?1) WHERE name = ?2",
        [table, column],
        |row| row.get(0),
    )
}

/// Catalog lookup first, so an existing column never reaches `ALTER TABLE`.
fn add_column_in(
    connection: &Connection,
    addition: &ColumnAddition,
) -> rusqlite::Result<ColumnOutcome> {
    if column_exists_in(connection, addition.table, addition.column)? {
        return Ok(ColumnOutcome::AlreadyExists);
    }

    connection.execute_batch(&format!(
        "ALTER TABLE {} ADD COLUMN {} {}",
        quote_identifier(addition.table),
        quote_identifier(addition.column),
        addition.definition,
    ))?;
    Ok(ColumnOutcome::Added)
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn storage_error(operation: &str, error: rusqlite::Error) -> CoreError {
    storage_error_text(operation, error.to_string())
}

fn storage_error_sqlite(message: &str) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(std::io::Error::other(message.to_string())))
}

fn parse_locale(raw: &str) -> rusqlite::Result<Locale> {
    raw.parse::<Locale>().map_err(|_| {
        storage_error_sqlite(&format!("unknown locale '{raw}' found in tasks record"))
    })
}

fn parse_task_type(raw: &str) -> rusqlite::Result<TaskType> {
    raw.parse::<TaskType>().map_err(|_| {
        storage_error_sqlite(&format!("unknown task type '{raw}' found in tasks record"))
    })
}

fn bool_to_sqlite(value: bool) -> i64 {
    if value { 1 } else { 0 }
}

fn storage_error_text(operation: &str, message: impl AsRef<str>) -> CoreError {
    CoreError {
        table: None,
        kind: CoreErrorKind::StorageFailure,
        message: format!("sqlite store '{operation}' failed: {}", message.as_ref()),
    }
}
