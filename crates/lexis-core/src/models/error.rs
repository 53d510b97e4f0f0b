use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoreErrorKind {
    OpenFailure,
    InvalidInput,
    StorageFailure,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct CoreError {
    pub table: Option<&'static str>,
    pub kind: CoreErrorKind,
    pub message: String,
}

impl CoreError {
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            table: None,
            kind,
            message: message.into(),
        }
    }

    pub fn with_table(mut self, table: &'static str) -> Self {
        self.table = Some(table);
        self
    }
}
