//! Mission aggregate: a named quest stage with gating tasks.

use super::{MissionName, Task};
use std::fmt;

/// Lifecycle callback fired when a mission is entered or left.
pub type Hook = Box<dyn FnMut() + Send>;

/// A named stage of a quest.
///
/// A mission owns an ordered list of [`Task`]s and a cursor into that list.
/// Its optional `on_enter`/`on_exit` hooks are stored here but only ever
/// invoked by [`QuestEngine`](crate::quest::services::QuestEngine), which
/// owns transition ordering.
pub struct Mission {
    name: MissionName,
    tasks: Vec<Task>,
    next: Option<MissionName>,
    on_enter: Option<Hook>,
    on_exit: Option<Hook>,
    task_cursor: usize,
}

impl Mission {
    /// Creates a terminal mission with no tasks and no hooks.
    #[must_use]
    pub fn new(name: impl Into<MissionName>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
            next: None,
            on_enter: None,
            on_exit: None,
            task_cursor: 0,
        }
    }

    /// Sets the successor mission. An empty name leaves the mission terminal.
    #[must_use]
    pub fn with_next(mut self, next: impl Into<MissionName>) -> Self {
        let successor = next.into();
        self.next = (!successor.is_empty()).then_some(successor);
        self
    }

    /// Appends a gating task.
    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Appends several gating tasks in order.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Sets the hook fired when the mission becomes current.
    #[must_use]
    pub fn with_on_enter(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.set_on_enter(hook);
        self
    }

    /// Sets the hook fired when the mission stops being current.
    #[must_use]
    pub fn with_on_exit(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.set_on_exit(hook);
        self
    }

    /// Replaces the enter hook in place.
    pub fn set_on_enter(&mut self, hook: impl FnMut() + Send + 'static) {
        self.on_enter = Some(Box::new(hook));
    }

    /// Replaces the exit hook in place.
    pub fn set_on_exit(&mut self, hook: impl FnMut() + Send + 'static) {
        self.on_exit = Some(Box::new(hook));
    }

    /// Returns the mission name.
    #[must_use]
    pub const fn name(&self) -> &MissionName {
        &self.name
    }

    /// Returns the successor mission name, if any.
    #[must_use]
    pub const fn next(&self) -> Option<&MissionName> {
        self.next.as_ref()
    }

    /// Returns whether the mission has no successor.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.next.is_none()
    }

    /// Returns all tasks in order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns how many tasks have been resolved so far.
    #[must_use]
    pub const fn resolved_tasks(&self) -> usize {
        self.task_cursor
    }

    /// Returns the task awaiting an answer.
    ///
    /// Returns `None` both for a mission without tasks and for one whose
    /// tasks are all resolved.
    #[must_use]
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.get(self.task_cursor)
    }

    /// Returns the clue of the current task, or `""` when there is none.
    #[must_use]
    pub fn clue(&self) -> &str {
        self.current_task().and_then(Task::clue).unwrap_or_default()
    }

    /// Submits an answer to the current task.
    ///
    /// On acceptance the cursor moves to the following task. A rejected
    /// answer leaves the cursor where it is, so the same task is asked again.
    /// With no current task the answer is trivially accepted.
    pub fn resolve_current_task(&mut self, answer: &str) -> bool {
        if !self.accepts(answer) {
            return false;
        }
        self.advance_task();
        true
    }

    /// Returns whether `answer` would resolve the current task, without
    /// moving the cursor.
    #[must_use]
    pub fn accepts(&self, answer: &str) -> bool {
        self.current_task().is_none_or(|task| task.accept(answer))
    }

    /// Returns whether one more accepted answer leaves every task resolved.
    #[must_use]
    pub const fn is_on_last_task(&self) -> bool {
        self.task_cursor.saturating_add(1) >= self.tasks.len()
    }

    pub(crate) fn advance_task(&mut self) {
        if !self.is_tasks_done() {
            self.task_cursor = self.task_cursor.saturating_add(1);
        }
    }

    /// Returns whether every task has been resolved.
    #[must_use]
    pub const fn is_tasks_done(&self) -> bool {
        self.task_cursor >= self.tasks.len()
    }

    pub(crate) const fn enter_hook(&mut self) -> Option<&mut Hook> {
        self.on_enter.as_mut()
    }

    pub(crate) const fn exit_hook(&mut self) -> Option<&mut Hook> {
        self.on_exit.as_mut()
    }
}

impl fmt::Debug for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mission")
            .field("name", &self.name)
            .field("next", &self.next)
            .field("tasks", &self.tasks)
            .field("task_cursor", &self.task_cursor)
            .field("has_on_enter", &self.on_enter.is_some())
            .field("has_on_exit", &self.on_exit.is_some())
            .finish()
    }
}
