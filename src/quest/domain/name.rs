//! Mission name type.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier of a mission within a quest.
///
/// Names are compared verbatim. An empty name is a valid identifier; an empty
/// successor reference, however, is read as "no successor" by
/// [`Mission::with_next`](super::Mission::with_next).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionName(String);

impl MissionName {
    /// Creates a mission name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the name is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for MissionName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for MissionName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for MissionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MissionName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
