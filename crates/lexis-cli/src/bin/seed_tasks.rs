use std::process::ExitCode;

use lexis_core::jobs::seed_tasks;

fn main() -> ExitCode {
    lexis_cli::run("lexis-seed-tasks", |store| {
        let report = seed_tasks(store)?;
        tracing::info!(
            attempted = report.attempted,
            inserted = report.inserted,
            failed = report.failures.len(),
            stored = report.stored,
            "seed summary"
        );
        Ok(())
    })
}
