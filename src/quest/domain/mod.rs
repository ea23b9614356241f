//! Domain model for quest progression.
//!
//! Missions, their gating tasks and the derived transition table are pure
//! values here. Sequencing of hooks and transitions lives in the service
//! layer.

mod error;
mod mission;
mod name;
mod status;
mod task;
mod transitions;

pub use error::{ParseQuestStatusError, QuestError, QuestResult};
pub use mission::{Hook, Mission};
pub use name::MissionName;
pub use status::QuestStatus;
pub use task::{Resolver, Task};
pub use transitions::TransitionTable;
