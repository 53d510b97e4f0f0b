use crate::models::TaskId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InsertFailure {
    pub task_id: TaskId,
    pub message: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SeedReport {
    pub attempted: usize,
    pub inserted: usize,
    pub failures: Vec<InsertFailure>,
    /// Rows present in the table once the run finished.
    pub stored: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColumnOutcome {
    Added,
    AlreadyExists,
    Failed(String),
}

impl ColumnOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ColumnOutcome::Failed(_))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnResult {
    pub table: &'static str,
    pub column: &'static str,
    pub outcome: ColumnOutcome,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColumnMigrationReport {
    pub columns: Vec<ColumnResult>,
}

impl ColumnMigrationReport {
    pub fn outcome(&self, column: &str) -> Option<&ColumnOutcome> {
        self.columns
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| &entry.outcome)
    }

    pub fn count(&self, predicate: impl Fn(&ColumnOutcome) -> bool) -> usize {
        self.columns
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BackfillReport {
    pub flag_column_added: bool,
    pub flagged: usize,
    pub unflagged: usize,
}

impl BackfillReport {
    pub fn total(&self) -> usize {
        self.flagged + self.unflagged
    }
}
