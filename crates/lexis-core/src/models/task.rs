use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Deserialize;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Sentence,
    Word,
}

impl TaskType {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Sentence => "sentence",
            TaskType::Word => "word",
        }
    }
}

impl FromStr for TaskType {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "sentence" => Ok(TaskType::Sentence),
            "word" => Ok(TaskType::Word),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Ru,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Es];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Es => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            "es" => Ok(Locale::Es),
            _ => Err(()),
        }
    }
}

/// One prompt of the static dataset, before it is given an id.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct TaskDefinition {
    pub description: String,
    pub locale: Locale,
    pub task_type: TaskType,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskRecord {
    pub id: TaskId,
    pub description: String,
    pub locale: Locale,
    pub task_type: TaskType,
}

impl TaskRecord {
    pub fn from_definition(definition: &TaskDefinition) -> Self {
        Self {
            id: TaskId::generate(),
            description: definition.description.clone(),
            locale: definition.locale,
            task_type: definition.task_type,
        }
    }
}
