//! Gating question attached to a mission.

use std::fmt;

/// Predicate deciding whether an answer resolves a task.
pub type Resolver = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A question that must be answered acceptably before a mission can pass.
///
/// Tasks are immutable once built. Progress through a mission's tasks is
/// tracked by the owning [`Mission`](super::Mission), never by the task.
pub struct Task {
    statement: String,
    clue: Option<String>,
    resolver: Option<Resolver>,
}

impl Task {
    /// Creates a task that accepts any answer.
    #[must_use]
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            clue: None,
            resolver: None,
        }
    }

    /// Sets the hint shown while this task is current.
    #[must_use]
    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    /// Sets the predicate an answer must satisfy.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Returns the question text.
    #[must_use]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Returns the hint text, if any.
    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Returns whether answers are checked by a predicate.
    #[must_use]
    pub const fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Returns whether `answer` resolves this task.
    ///
    /// A task without a resolver accepts every answer.
    #[must_use]
    pub fn accept(&self, answer: &str) -> bool {
        self.resolver.as_ref().is_none_or(|resolve| resolve(answer))
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("statement", &self.statement)
            .field("clue", &self.clue)
            .field("has_resolver", &self.has_resolver())
            .finish()
    }
}
