//! Application services for quest progression.

mod engine;

pub use engine::QuestEngine;
