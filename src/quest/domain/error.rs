//! Error types for quest progression and status parsing.

use super::MissionName;
use thiserror::Error;

/// Errors returned by quest engine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestError {
    /// The quest was started without any registered mission.
    #[error("quest has no missions")]
    NoMissions,

    /// The quest was started more than once.
    #[error("quest is already started")]
    AlreadyStarted,

    /// An advancing or resolving operation ran before the quest started.
    #[error("quest is not started")]
    NotStarted,

    /// An advancing or resolving operation ran after the quest finished.
    #[error("quest is finished")]
    Finished,

    /// The current mission advances to a mission that was never registered.
    #[error("mission '{from}' advances to unregistered mission '{target}'")]
    UnknownMission {
        /// Mission the advance was attempted from.
        from: MissionName,
        /// Successor named by that mission.
        target: MissionName,
    },
}

/// Result type for quest engine operations.
pub type QuestResult<T> = Result<T, QuestError>;

/// Error returned while parsing a quest status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown quest status: {0}")]
pub struct ParseQuestStatusError(pub String);
