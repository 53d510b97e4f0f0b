pub mod error;
pub mod report;
pub mod schema;
pub mod task;

pub use error::{CoreError, CoreErrorKind};
pub use report::{
    BackfillReport, ColumnMigrationReport, ColumnOutcome, ColumnResult, InsertFailure, SeedReport,
};
pub use schema::{ColumnAddition, FlagBackfill};
pub use task::{Locale, TaskDefinition, TaskId, TaskRecord, TaskType};
