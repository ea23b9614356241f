//! Declarative quest definitions loaded from TOML.
//!
//! A definition describes missions, their successors and answer-matched
//! tasks. Hooks and custom resolvers cannot be expressed in a file; attach
//! them to the built engine with
//! [`QuestEngine::for_each_mission`] or [`QuestEngine::mission_mut`].

use crate::quest::{
    domain::{Mission, Task},
    services::QuestEngine,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors returned while loading a quest definition.
#[derive(Debug, Error)]
pub enum QuestDefinitionError {
    /// The definition file could not be read.
    #[error("failed to read quest definition {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The definition is not valid TOML for the expected layout.
    #[error("failed to parse quest definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// A mission has an empty name.
    #[error("mission name must not be empty")]
    EmptyMissionName,

    /// Two missions share a name.
    #[error("mission '{0}' is declared more than once")]
    DuplicateMission(String),

    /// A mission's successor is not declared in the same definition.
    #[error("mission '{mission}' names undeclared next mission '{next}'")]
    UnknownNextMission {
        /// Mission holding the reference.
        mission: String,
        /// Undeclared successor name.
        next: String,
    },
}

/// How a submitted answer is compared with the accepted answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMatching {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Equality after trimming whitespace, ignoring case.
    CaseInsensitive,
}

impl AnswerMatching {
    /// Returns whether `answer` matches `expected` under this mode.
    #[must_use]
    pub fn matches(self, expected: &str, answer: &str) -> bool {
        match self {
            Self::Exact => expected == answer,
            Self::CaseInsensitive => expected.trim().to_lowercase() == answer.trim().to_lowercase(),
        }
    }
}

/// Task entry of a quest definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Question text.
    pub statement: String,
    /// Optional hint.
    #[serde(default)]
    pub clue: Option<String>,
    /// Accepted answers. Empty means any answer is accepted.
    #[serde(default)]
    pub answers: Vec<String>,
    /// Comparison mode for `answers`.
    #[serde(default)]
    pub matching: AnswerMatching,
}

impl TaskDefinition {
    /// Builds the domain task.
    #[must_use]
    pub fn to_task(&self) -> Task {
        let mut task = Task::new(self.statement.clone());
        if let Some(clue) = &self.clue {
            task = task.with_clue(clue.clone());
        }
        if self.answers.is_empty() {
            return task;
        }

        let answers = self.answers.clone();
        let matching = self.matching;
        task.with_resolver(move |answer| {
            answers
                .iter()
                .any(|expected| matching.matches(expected, answer))
        })
    }
}

/// Mission entry of a quest definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionDefinition {
    /// Unique mission name.
    pub name: String,
    /// Successor mission. Absent or empty means terminal.
    #[serde(default)]
    pub next: Option<String>,
    /// Gating tasks in order.
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskDefinition>,
}

impl MissionDefinition {
    fn successor(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }

    /// Builds the domain mission without hooks.
    #[must_use]
    pub fn to_mission(&self) -> Mission {
        Mission::new(self.name.as_str())
            .with_tasks(self.tasks.iter().map(TaskDefinition::to_task))
            .with_next(self.next.as_deref().unwrap_or_default())
    }
}

/// A whole quest as declared in a TOML file.
///
/// Missions are kept in file order; the first one is the initial mission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinition {
    /// Missions in declaration order.
    #[serde(default, rename = "mission")]
    pub missions: Vec<MissionDefinition>,
}

impl QuestDefinition {
    /// Parses and validates a definition from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`QuestDefinitionError::Parse`] for malformed TOML and the
    /// validation variants described on [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, QuestDefinitionError> {
        let definition: Self = toml::from_str(text)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Reads, parses and validates a definition file.
    ///
    /// # Errors
    ///
    /// Returns [`QuestDefinitionError::Read`] when the file cannot be read,
    /// otherwise the same errors as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuestDefinitionError> {
        let file_path = path.as_ref();
        let text = std::fs::read_to_string(file_path).map_err(|source| {
            QuestDefinitionError::Read {
                path: file_path.to_path_buf(),
                source,
            }
        })?;
        let definition = Self::from_toml_str(&text)?;
        info!(
            path = %file_path.display(),
            missions = definition.missions.len(),
            "loaded quest definition"
        );
        Ok(definition)
    }

    /// Checks names and successor references.
    ///
    /// # Errors
    ///
    /// Returns [`QuestDefinitionError::EmptyMissionName`],
    /// [`QuestDefinitionError::DuplicateMission`] or
    /// [`QuestDefinitionError::UnknownNextMission`].
    pub fn validate(&self) -> Result<(), QuestDefinitionError> {
        let mut names = HashSet::with_capacity(self.missions.len());
        for mission in &self.missions {
            if mission.name.is_empty() {
                return Err(QuestDefinitionError::EmptyMissionName);
            }
            if !names.insert(mission.name.as_str()) {
                return Err(QuestDefinitionError::DuplicateMission(mission.name.clone()));
            }
        }

        for mission in &self.missions {
            if let Some(next) = mission.successor()
                && !names.contains(next)
            {
                return Err(QuestDefinitionError::UnknownNextMission {
                    mission: mission.name.clone(),
                    next: next.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Builds an unstarted engine with the missions registered in order.
    #[must_use]
    pub fn to_engine(&self) -> QuestEngine {
        let mut engine = QuestEngine::new();
        for mission in &self.missions {
            engine.add_mission(mission.to_mission());
        }
        engine
    }
}
