//! Linear transition table derived from mission successors.

use super::{Mission, MissionName};
use std::collections::HashMap;

/// Maps each non-terminal mission to its successor.
///
/// The quest has a single payload-less "advance" event, so a table keyed by
/// source mission is the whole state machine. A mission without an entry is
/// terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    edges: HashMap<MissionName, MissionName>,
}

impl TransitionTable {
    /// Builds the table from every mission that names a successor.
    #[must_use]
    pub fn from_missions<'a>(missions: impl IntoIterator<Item = &'a Mission>) -> Self {
        let edges = missions
            .into_iter()
            .filter_map(|mission| {
                mission
                    .next()
                    .map(|next| (mission.name().clone(), next.clone()))
            })
            .collect();
        Self { edges }
    }

    /// Returns the advance target from `from`, if an edge exists.
    #[must_use]
    pub fn target(&self, from: &str) -> Option<&MissionName> {
        self.edges.get(from)
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the table has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
