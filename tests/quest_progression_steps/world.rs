//! Shared world state for quest progression BDD scenarios.

use quester::quest::{
    domain::{Mission, QuestError},
    services::QuestEngine,
};
use rstest::fixture;
use std::sync::{Arc, Mutex, PoisonError};

/// Scenario world for quest progression behaviour tests.
pub struct QuestWorld {
    pub engine: QuestEngine,
    pub hook_log: Arc<Mutex<Vec<String>>>,
    pub last_result: Option<Result<(), QuestError>>,
    pub last_accepted: Option<bool>,
}

impl QuestWorld {
    /// Creates a world with an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: QuestEngine::new(),
            hook_log: Arc::new(Mutex::new(Vec::new())),
            last_result: None,
            last_accepted: None,
        }
    }

    /// Registers `mission` with hooks that append to the hook log.
    pub fn register(&mut self, mission: Mission) {
        let name = mission.name().to_string();
        let enter_log = Arc::clone(&self.hook_log);
        let exit_log = Arc::clone(&self.hook_log);
        let enter_entry = format!("enter {name}");
        let exit_entry = format!("exit {name}");
        let journaled = mission
            .with_on_enter(move || append(&enter_log, &enter_entry))
            .with_on_exit(move || append(&exit_log, &exit_entry));
        self.engine.add_mission(journaled);
    }

    /// Returns the hook log joined with `", "`.
    ///
    /// # Errors
    ///
    /// Returns an error if a hook panicked while holding the log.
    pub fn hook_log(&self) -> Result<String, eyre::Report> {
        let entries = self
            .hook_log
            .lock()
            .map_err(|err| eyre::eyre!("hook log poisoned: {err}"))?;
        Ok(entries.join(", "))
    }
}

impl Default for QuestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Records `entry` even when a previous holder panicked; [`QuestWorld::hook_log`]
/// still reports the poisoning.
fn append(log: &Mutex<Vec<String>>, entry: &str) {
    log.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(entry.to_owned());
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> QuestWorld {
    QuestWorld::default()
}
