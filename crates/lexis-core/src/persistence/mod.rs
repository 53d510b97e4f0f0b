use crate::models::{
    BackfillReport, ColumnAddition, ColumnOutcome, CoreError, FlagBackfill, InsertFailure,
    TaskRecord,
};

pub type PersistenceResult<T> = Result<T, CoreError>;

pub trait TaskSeedStore {
    fn ensure_tasks_table(&self) -> PersistenceResult<()>;

    fn clear_tasks(&self) -> PersistenceResult<usize>;

    /// Inserts each record as its own statement. A record that fails is
    /// reported back and does not stop the remaining inserts.
    fn insert_tasks(&self, tasks: &[TaskRecord]) -> PersistenceResult<Vec<InsertFailure>>;

    fn list_tasks(&self) -> PersistenceResult<Vec<TaskRecord>>;
}

pub trait ColumnStore {
    fn table_exists(&self, table: &str) -> PersistenceResult<bool>;

    fn column_names(&self, table: &str) -> PersistenceResult<Vec<String>>;

    fn add_column(&self, addition: &ColumnAddition) -> PersistenceResult<ColumnOutcome>;
}

pub trait FlagBackfillStore {
    fn backfill_flag(&self, plan: &FlagBackfill) -> PersistenceResult<BackfillReport>;
}
