//! Quest lifecycle status.

use super::ParseQuestStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Missions may still be registered; nothing is current yet.
    NotStarted,
    /// A mission is current and can be advanced.
    InProgress,
    /// An advance from a terminal mission ended the quest.
    Finished,
}

impl QuestStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }

    /// Returns whether `start` has succeeded.
    #[must_use]
    pub const fn is_started(self) -> bool {
        matches!(self, Self::InProgress | Self::Finished)
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for QuestStatus {
    type Error = ParseQuestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseQuestStatusError(value.to_owned())),
        }
    }
}
