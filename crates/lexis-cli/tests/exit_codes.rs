use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use lexis_cli::{RunStatus, run_with_args};
use lexis_core::jobs::seed_tasks;
use lexis_core::models::{CoreError, CoreErrorKind};
use lexis_core::persistence::TaskSeedStore;
use rusqlite::Connection;

fn test_db_path(test_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("lexis-cli-{test_name}-{nanos}.sqlite3"))
}

fn create_database(test_name: &str, setup_sql: &str) -> PathBuf {
    let path = test_db_path(test_name);
    Connection::open(&path)
        .unwrap()
        .execute_batch(setup_sql)
        .unwrap();
    path
}

fn path_arg(path: &Path) -> Vec<String> {
    vec![path.display().to_string()]
}

#[test]
fn missing_database_exits_one_without_running_the_job() {
    let path = test_db_path("exit-missing");
    let ran = Cell::new(false);

    let code = run_with_args("lexis-test", path_arg(&path), |_| {
        ran.set(true);
        Ok(())
    });

    assert_eq!(code, RunStatus::OpenFailed);
    assert_eq!(code.code(), 1);
    assert!(!ran.get());
    assert!(!path.exists());
}

#[test]
fn successful_job_exits_zero() {
    let path = create_database("exit-success", "CREATE TABLE words (id INTEGER PRIMARY KEY);");

    let code = run_with_args("lexis-test", path_arg(&path), |store| {
        seed_tasks(store)?;
        assert!(!store.list_tasks()?.is_empty());
        Ok(())
    });

    assert_eq!(code, RunStatus::Completed);
    assert_eq!(code.code(), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn aborted_job_is_logged_and_exits_zero() {
    let path = create_database("exit-job-error", "CREATE TABLE words (id INTEGER PRIMARY KEY);");

    let code = run_with_args("lexis-test", path_arg(&path), |_| {
        Err(
            CoreError::new(CoreErrorKind::StorageFailure, "simulated clear failure")
                .with_table("tasks"),
        )
    });

    assert_eq!(code, RunStatus::Aborted);
    assert_eq!(code.code(), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn seeding_into_a_view_aborts_but_exits_zero() {
    let path = create_database(
        "exit-tasks-view",
        "CREATE TABLE words (id INTEGER PRIMARY KEY);
         CREATE VIEW tasks AS SELECT id, 'x' AS description, 'en' AS locale, 'word' AS task_type FROM words;",
    );
    let outcome = Cell::new(None);

    let code = run_with_args("lexis-test", path_arg(&path), |store| {
        let result = seed_tasks(store).map(|_| ());
        outcome.set(Some(result.is_err()));
        result
    });

    assert_eq!(outcome.get(), Some(true));
    assert_eq!(code, RunStatus::Aborted);
    assert_eq!(code.code(), 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn extra_arguments_exit_two_without_opening() {
    let ran = Cell::new(false);
    let args = vec!["a.db".to_string(), "b.db".to_string()];

    let code = run_with_args("lexis-test", args, |_| {
        ran.set(true);
        Ok(())
    });

    assert_eq!(code, RunStatus::Usage);
    assert_eq!(code.code(), 2);
    assert!(!ran.get());
}
