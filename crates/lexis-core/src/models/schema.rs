/// An additive `ALTER TABLE .. ADD COLUMN` change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnAddition {
    pub table: &'static str,
    pub column: &'static str,
    pub definition: &'static str,
}

/// A boolean column on `primary_table` derived from whether the row's
/// `primary_key` appears in `lookup_table.lookup_key`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagBackfill {
    pub primary_table: &'static str,
    pub primary_key: &'static str,
    pub flag_column: &'static str,
    pub lookup_table: &'static str,
    pub lookup_key: &'static str,
}

impl FlagBackfill {
    pub fn flag_column_addition(&self) -> ColumnAddition {
        ColumnAddition {
            table: self.primary_table,
            column: self.flag_column,
            definition: "INTEGER NOT NULL DEFAULT 0",
        }
    }
}
