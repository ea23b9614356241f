//! Step definitions for quest progression behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
