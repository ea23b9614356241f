//! Quester: linear quest progression engine.
//!
//! This crate tracks a player's progress through an ordered chain of named
//! missions, each optionally gated by tasks that must be answered before the
//! quest moves on. It answers "which mission am I on", "what must I resolve
//! next" and "what hint applies now", and fires enter/exit hooks as missions
//! change.
//!
//! # Architecture
//!
//! Quester follows hexagonal architecture principles:
//!
//! - **Domain**: Missions, tasks and the derived transition table
//! - **Services**: The quest engine sequencing transitions and hooks
//! - **Adapters**: Quest definitions loaded from TOML
//!
//! # Modules
//!
//! - [`quest`]: Mission registration, progression and task resolution

pub mod quest;
