//! Quest records and their lifecycle state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Unique quest identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(Uuid);

impl QuestId {
    /// Fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for QuestId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Lifecycle: NotStarted → InProgress → Completed | Failed. Completed and Failed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuestState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

impl QuestState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuestState::Completed | QuestState::Failed)
    }
}

impl fmt::Display for QuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestState::NotStarted => "NotStarted",
            QuestState::InProgress => "InProgress",
            QuestState::Completed => "Completed",
            QuestState::Failed => "Failed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub name: String,
    pub state: QuestState,
}

impl Quest {
    /// New quest in the NotStarted state.
    pub fn new(id: QuestId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            state: QuestState::NotStarted,
        }
    }
}

/// Shared context of the quest pipeline: quest records keyed by id.
pub type QuestBook = HashMap<QuestId, Quest>;
