//! Quest progression for Quester.
//!
//! Missions are registered with a [`services::QuestEngine`], which derives a
//! linear transition table when the quest starts and then advances one
//! mission at a time, either explicitly or as soon as the current mission's
//! tasks are all answered. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
