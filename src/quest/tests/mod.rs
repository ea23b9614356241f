//! Unit tests for quest progression.


use crate::quest::domain::Mission;
use std::sync::{Arc, Mutex};

/// Shared record of hook invocations, in firing order.
#[derive(Debug, Clone, Default)]
struct HookJournal(Arc<Mutex<Vec<String>>>);

impl HookJournal {
    /// Attaches recording enter/exit hooks to `mission`.
    fn record(&self, mission: Mission) -> Mission {
        let name = mission.name().to_string();
        let enter = self.clone();
        let exit = self.clone();
        let enter_entry = format!("enter {name}");
        let exit_entry = format!("exit {name}");
        mission
            .with_on_enter(move || enter.push(&enter_entry))
            .with_on_exit(move || exit.push(&exit_entry))
    }

    fn push(&self, entry: &str) {
        self.0.lock().expect("journal lock").push(entry.to_owned());
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().expect("journal lock").clone()
    }

    fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|seen| *seen == entry).count()
    }
}
