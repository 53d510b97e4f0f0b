use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use lexis_core::jobs::{apply_column_additions, migrate_word_columns};
use lexis_core::models::{ColumnAddition, ColumnOutcome};
use lexis_core::persistence::ColumnStore;
use lexis_core::sqlite::{SqliteStore, WORDS_TABLE};
use rusqlite::Connection;

fn test_db_path(test_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("lexis-{test_name}-{nanos}.sqlite3"))
}

fn open_fixture(test_name: &str, setup_sql: &str) -> (PathBuf, SqliteStore) {
    let path = test_db_path(test_name);
    Connection::open(&path)
        .unwrap()
        .execute_batch(setup_sql)
        .unwrap();
    let store = SqliteStore::open(&path).unwrap();
    (path, store)
}

const WORDS_FIXTURE: &str = "
CREATE TABLE words (id INTEGER PRIMARY KEY, word TEXT NOT NULL);
INSERT INTO words (id, word) VALUES (1, 'casa'), (2, 'perro');
";

#[test]
fn fresh_table_gets_all_three_columns() {
    let (path, store) = open_fixture("columns-fresh", WORDS_FIXTURE);

    let report = migrate_word_columns(&store);

    assert_eq!(report.columns.len(), 3);
    assert!(
        report
            .columns
            .iter()
            .all(|entry| entry.outcome == ColumnOutcome::Added)
    );
    assert_eq!(
        store.column_names(WORDS_TABLE).unwrap(),
        vec!["id", "word", "translation", "sentence", "type"]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn existing_rows_take_the_type_default() {
    let (path, store) = open_fixture("columns-default", WORDS_FIXTURE);

    migrate_word_columns(&store);

    let connection = Connection::open(&path).unwrap();
    let mut statement = connection
        .prepare("SELECT type, translation FROM words ORDER BY id")
        .unwrap();
    let rows: Vec<(String, Option<String>)> = statement
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();
    assert_eq!(
        rows,
        vec![("normal".to_string(), None), ("normal".to_string(), None)]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn running_twice_leaves_schema_unchanged() {
    let (path, store) = open_fixture("columns-twice", WORDS_FIXTURE);

    migrate_word_columns(&store);
    let after_first = store.column_names(WORDS_TABLE).unwrap();

    let second = migrate_word_columns(&store);
    let after_second = store.column_names(WORDS_TABLE).unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(
        second.count(|outcome| *outcome == ColumnOutcome::AlreadyExists),
        3
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn pre_existing_column_is_reported_and_the_rest_are_added() {
    let (path, store) = open_fixture(
        "columns-partial",
        "CREATE TABLE words (id INTEGER PRIMARY KEY, word TEXT NOT NULL, translation TEXT);",
    );

    let report = migrate_word_columns(&store);

    assert_eq!(
        report.outcome("translation"),
        Some(&ColumnOutcome::AlreadyExists)
    );
    assert_eq!(report.outcome("sentence"), Some(&ColumnOutcome::Added));
    assert_eq!(report.outcome("type"), Some(&ColumnOutcome::Added));
    assert_eq!(
        store.column_names(WORDS_TABLE).unwrap(),
        vec!["id", "word", "translation", "sentence", "type"]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_table_fails_every_column_without_aborting() {
    let (path, store) = open_fixture(
        "columns-missing-table",
        "CREATE TABLE sentences (id INTEGER PRIMARY KEY);",
    );

    let report = migrate_word_columns(&store);

    assert_eq!(report.columns.len(), 3);
    assert_eq!(report.count(ColumnOutcome::is_failure), 3);
    match report.outcome("translation") {
        Some(ColumnOutcome::Failed(message)) => assert!(message.contains("no such table")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!store.table_exists(WORDS_TABLE).unwrap());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn one_failing_column_does_not_block_later_ones() {
    let (path, store) = open_fixture("columns-one-fails", WORDS_FIXTURE);
    let additions = [
        ColumnAddition {
            table: WORDS_TABLE,
            column: "strict",
            definition: "TEXT NOT NULL",
        },
        ColumnAddition {
            table: WORDS_TABLE,
            column: "notes",
            definition: "TEXT",
        },
    ];

    let report = apply_column_additions(&store, &additions);

    assert!(report.outcome("strict").is_some_and(ColumnOutcome::is_failure));
    assert_eq!(report.outcome("notes"), Some(&ColumnOutcome::Added));
    let columns = store.column_names(WORDS_TABLE).unwrap();
    assert!(columns.contains(&"notes".to_string()));
    assert!(!columns.contains(&"strict".to_string()));

    let _ = std::fs::remove_file(&path);
}
