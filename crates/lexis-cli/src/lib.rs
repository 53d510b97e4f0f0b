use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

use lexis_core::models::CoreError;
use lexis_core::sqlite::SqliteStore;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_DATABASE_PATH: &str = "spanish_app.db";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UsageError {
    pub unexpected: Vec<String>,
}

impl Display for UsageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unexpected arguments: {}", self.unexpected.join(" "))
    }
}

impl std::error::Error for UsageError {}

/// Resolves the database path from the arguments after the program name.
/// At most one positional path is accepted.
pub fn database_path_from_args<I>(args: I) -> Result<PathBuf, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

    let unexpected: Vec<String> = args.collect();
    if !unexpected.is_empty() {
        return Err(UsageError { unexpected });
    }
    Ok(path)
}

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How a maintenance run ended. Only a usage error or an unopenable
/// database is non-zero; an aborted job is logged and still exits 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunStatus {
    Completed,
    Aborted,
    OpenFailed,
    Usage,
}

impl RunStatus {
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Completed | RunStatus::Aborted => 0,
            RunStatus::OpenFailed => 1,
            RunStatus::Usage => 2,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Shared driver for the maintenance binaries. Reads the path from the
/// process arguments.
pub fn run(binary: &str, job: impl FnOnce(&SqliteStore) -> Result<(), CoreError>) -> ExitCode {
    init_logging();
    run_with_args(binary, std::env::args().skip(1), job).into()
}

/// Parses the path, opens the database and runs the job.
pub fn run_with_args<I>(
    binary: &str,
    args: I,
    job: impl FnOnce(&SqliteStore) -> Result<(), CoreError>,
) -> RunStatus
where
    I: IntoIterator<Item = String>,
{
    let path = match database_path_from_args(args) {
        Ok(path) => path,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("usage: {binary} [database-path]");
            return RunStatus::Usage;
        }
    };

    let store = match SqliteStore::open(&path) {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(
                path = %path.display(),
                kind = ?error.kind,
                message = %error.message,
                "unable to open database"
            );
            return RunStatus::OpenFailed;
        }
    };
    tracing::info!(path = %store.database_path().display(), "opened database");

    match job(&store) {
        Ok(()) => {
            tracing::info!("all done");
            RunStatus::Completed
        }
        Err(error) => {
            tracing::error!(
                table = error.table.unwrap_or("-"),
                kind = ?error.kind,
                message = %error.message,
                "run aborted"
            );
            RunStatus::Aborted
        }
    }
}
