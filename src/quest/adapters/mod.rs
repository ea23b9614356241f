//! Adapters that build quests from external sources.

pub mod definition;
