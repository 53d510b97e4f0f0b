use crate::models::{ColumnAddition, FlagBackfill};

pub const TASKS_TABLE: &str = "tasks";

pub const CREATE_TASKS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    locale TEXT NOT NULL,
    task_type TEXT NOT NULL
);
"#;

pub const WORDS_TABLE: &str = "words";

const WORD_COLUMN_TRANSLATION: ColumnAddition = ColumnAddition {
    table: WORDS_TABLE,
    column: "translation",
    definition: "TEXT",
};

const WORD_COLUMN_SENTENCE: ColumnAddition = ColumnAddition {
    table: WORDS_TABLE,
    column: "sentence",
    definition: "TEXT",
};

const WORD_COLUMN_TYPE: ColumnAddition = ColumnAddition {
    table: WORDS_TABLE,
    column: "type",
    definition: "TEXT NOT NULL DEFAULT 'normal'",
};

const WORD_COLUMNS: [ColumnAddition; 3] =
    [WORD_COLUMN_TRANSLATION, WORD_COLUMN_SENTENCE, WORD_COLUMN_TYPE];

pub fn word_columns() -> &'static [ColumnAddition] {
    &WORD_COLUMNS
}

pub const AUDIO_FLAG: FlagBackfill = FlagBackfill {
    primary_table: "sentences",
    primary_key: "id",
    flag_column: "has_audio",
    lookup_table: "sentence_audio",
    lookup_key: "sentence_id",
};
