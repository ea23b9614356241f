//! Quest engine: mission registry, transition sequencing and task cascade.
//!
//! Provides [`QuestEngine`], which owns every registered [`Mission`], derives
//! the linear [`TransitionTable`] when the quest starts, tracks the single
//! current mission and fires enter/exit hooks in leave-then-enter order.

use crate::quest::domain::{
    Mission, MissionName, QuestError, QuestResult, QuestStatus, TransitionTable,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Position of the engine in the quest lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    NotStarted,
    Active(MissionName),
    Finished(MissionName),
}

/// Single-threaded quest state machine.
///
/// Every operation runs to completion on the caller's thread, including the
/// hooks and resolvers it invokes. The engine holds no locks; wrap it in one
/// `Mutex` to share it between threads.
#[derive(Debug)]
pub struct QuestEngine {
    missions: HashMap<MissionName, Mission>,
    initial: Option<MissionName>,
    transitions: TransitionTable,
    cursor: Cursor,
}

impl Default for QuestEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestEngine {
    /// Creates an engine with no missions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            missions: HashMap::new(),
            initial: None,
            transitions: TransitionTable::default(),
            cursor: Cursor::NotStarted,
        }
    }

    /// Registers a mission, replacing any mission with the same name.
    ///
    /// The first distinct name ever registered becomes the initial mission;
    /// later overwrites never change it. Missions registered after
    /// [`start`](Self::start) are stored but do not alter the transition
    /// table built at that time.
    pub fn add_mission(&mut self, mission: Mission) -> &mut Self {
        let name = mission.name().clone();
        if self.cursor != Cursor::NotStarted {
            warn!(mission = %name, "mission registered after quest start; transitions unchanged");
        }
        if self.initial.is_none() {
            self.initial = Some(name.clone());
        }
        if self.missions.insert(name.clone(), mission).is_some() {
            warn!(mission = %name, "mission re-registered; previous configuration replaced");
        } else {
            debug!(mission = %name, "mission registered");
        }
        self
    }

    /// Starts the quest at the initial mission.
    ///
    /// Builds the transition table, makes the initial mission current and
    /// fires its enter hook before returning.
    ///
    /// # Errors
    ///
    /// Returns [`QuestError::AlreadyStarted`] on a second call and
    /// [`QuestError::NoMissions`] when nothing was registered.
    pub fn start(&mut self) -> QuestResult<()> {
        if self.cursor != Cursor::NotStarted {
            return Err(QuestError::AlreadyStarted);
        }
        let initial = self.initial.clone().ok_or(QuestError::NoMissions)?;

        self.transitions = TransitionTable::from_missions(self.missions.values());
        self.cursor = Cursor::Active(initial.clone());
        info!(
            mission = %initial,
            missions = self.missions.len(),
            edges = self.transitions.len(),
            "quest started"
        );
        self.fire_enter(&initial);
        Ok(())
    }

    /// Returns the current mission.
    ///
    /// Returns `None` before the quest starts. After the quest finishes this
    /// is the terminal mission it finished on.
    #[must_use]
    pub fn current(&self) -> Option<&Mission> {
        match &self.cursor {
            Cursor::NotStarted => None,
            Cursor::Active(name) | Cursor::Finished(name) => self.missions.get(name),
        }
    }

    /// Advances from the current mission to its successor.
    ///
    /// Fires the current mission's exit hook, moves the cursor, then fires
    /// the successor's enter hook. When the current mission has no outgoing
    /// edge the quest finishes and no hook fires.
    ///
    /// # Errors
    ///
    /// Returns [`QuestError::NotStarted`] or [`QuestError::Finished`] when
    /// the quest cannot advance, and [`QuestError::UnknownMission`] when the
    /// successor was never registered. State is unchanged on error.
    pub fn pass_current(&mut self) -> QuestResult<()> {
        let current = self.active_mission()?.clone();
        self.advance_from(&current)
    }

    /// Submits an answer to the current mission's current task.
    ///
    /// Returns whether the answer was accepted. When acceptance resolves the
    /// mission's last task the quest advances within this same call, exactly
    /// as [`pass_current`](Self::pass_current) would. A mission without tasks
    /// accepts any answer and advances immediately.
    ///
    /// # Errors
    ///
    /// Returns [`QuestError::NotStarted`] or [`QuestError::Finished`] when
    /// the quest cannot advance, and [`QuestError::UnknownMission`] when the
    /// cascading advance targets an unregistered mission. The task cursor is
    /// left untouched on error.
    pub fn resolve_current_task(&mut self, answer: &str) -> QuestResult<bool> {
        let current = self.active_mission()?.clone();
        let Some(mission) = self.missions.get(&current) else {
            return Ok(false);
        };

        if !mission.accepts(answer) {
            debug!(mission = %current, "answer rejected");
            return Ok(false);
        }
        let completes = mission.is_on_last_task();
        if completes {
            self.successor(&current)?;
        }

        if let Some(mission) = self.missions.get_mut(&current) {
            mission.advance_task();
            debug!(
                mission = %current,
                resolved = mission.resolved_tasks(),
                total = mission.tasks().len(),
                "answer accepted"
            );
        }
        if completes {
            self.advance_from(&current)?;
        }
        Ok(true)
    }

    /// Returns the clue of the current task.
    ///
    /// Returns `""` before the quest starts, after it finishes, or when the
    /// current mission has no pending task.
    #[must_use]
    pub fn clue(&self) -> &str {
        match &self.cursor {
            Cursor::Active(name) => self.missions.get(name).map_or("", Mission::clue),
            Cursor::NotStarted | Cursor::Finished(_) => "",
        }
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> QuestStatus {
        match self.cursor {
            Cursor::NotStarted => QuestStatus::NotStarted,
            Cursor::Active(_) => QuestStatus::InProgress,
            Cursor::Finished(_) => QuestStatus::Finished,
        }
    }

    /// Returns whether [`start`](Self::start) has succeeded.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.status().is_started()
    }

    /// Returns whether the quest has finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.cursor, Cursor::Finished(_))
    }

    /// Visits every registered mission in unspecified order.
    ///
    /// Intended for bulk inspection and setup, such as attaching hooks to
    /// missions loaded from a definition file.
    pub fn for_each_mission(&mut self, mut visitor: impl FnMut(&mut Mission)) -> &mut Self {
        for mission in self.missions.values_mut() {
            visitor(mission);
        }
        self
    }

    /// Returns a registered mission by name.
    #[must_use]
    pub fn mission(&self, name: &str) -> Option<&Mission> {
        self.missions.get(name)
    }

    /// Returns a registered mission by name for in-place setup.
    pub fn mission_mut(&mut self, name: &str) -> Option<&mut Mission> {
        self.missions.get_mut(name)
    }

    /// Returns the name of the first mission ever registered.
    #[must_use]
    pub const fn initial_mission(&self) -> Option<&MissionName> {
        self.initial.as_ref()
    }

    /// Returns the number of registered missions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Returns whether no mission has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    fn active_mission(&self) -> QuestResult<&MissionName> {
        match &self.cursor {
            Cursor::Active(name) => Ok(name),
            Cursor::NotStarted => Err(QuestError::NotStarted),
            Cursor::Finished(_) => Err(QuestError::Finished),
        }
    }

    /// Looks up the advance target from `current`; `None` means terminal.
    fn successor(&self, current: &MissionName) -> QuestResult<Option<MissionName>> {
        let Some(target) = self.transitions.target(current.as_str()) else {
            return Ok(None);
        };
        if !self.missions.contains_key(target) {
            warn!(mission = %current, target = %target, "successor mission is not registered");
            return Err(QuestError::UnknownMission {
                from: current.clone(),
                target: target.clone(),
            });
        }
        Ok(Some(target.clone()))
    }

    fn advance_from(&mut self, current: &MissionName) -> QuestResult<()> {
        let Some(target) = self.successor(current)? else {
            info!(mission = %current, "quest finished");
            self.cursor = Cursor::Finished(current.clone());
            return Ok(());
        };

        self.fire_exit(current);
        self.cursor = Cursor::Active(target.clone());
        debug!(from = %current, to = %target, "mission passed");
        self.fire_enter(&target);
        Ok(())
    }

    fn fire_enter(&mut self, name: &MissionName) {
        if let Some(hook) = self.missions.get_mut(name).and_then(Mission::enter_hook) {
            hook();
        }
    }

    fn fire_exit(&mut self, name: &MissionName) {
        if let Some(hook) = self.missions.get_mut(name).and_then(Mission::exit_hook) {
            hook();
        }
    }
}
