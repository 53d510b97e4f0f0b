use std::process::ExitCode;

use lexis_core::jobs::backfill_audio_flag;

fn main() -> ExitCode {
    lexis_cli::run("lexis-backfill-audio-flag", |store| {
        let report = backfill_audio_flag(store)?;
        tracing::info!(
            total = report.total(),
            with_audio = report.flagged,
            without_audio = report.unflagged,
            "audio flag summary"
        );
        Ok(())
    })
}
