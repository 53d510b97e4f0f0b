pub mod backfill;
pub mod columns;
pub mod seed;

pub use backfill::{backfill_audio_flag, backfill_flag};
pub use columns::{apply_column_additions, migrate_word_columns};
pub use seed::{seed_tasks, seed_tasks_from};
