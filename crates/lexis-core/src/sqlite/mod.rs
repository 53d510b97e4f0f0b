pub mod schema;
pub mod store;

pub use schema::{AUDIO_FLAG, TASKS_TABLE, WORDS_TABLE, word_columns};
pub use store::SqliteStore;
