//! Given steps for quest progression BDD scenarios.

use super::world::QuestWorld;
use quester::quest::domain::{Mission, Task};
use rstest_bdd_macros::given;

#[given(r#"a mission "{name}" leading to "{next}""#)]
fn mission_leading_to(world: &mut QuestWorld, name: String, next: String) {
    world.register(Mission::new(name).with_next(next));
}

#[given(r#"a terminal mission "{name}""#)]
fn terminal_mission(world: &mut QuestWorld, name: String) {
    world.register(Mission::new(name));
}

#[given(r#"the mission "{name}" asks "{statement}" accepting "{answer}" with clue "{clue}""#)]
fn mission_asks(
    world: &mut QuestWorld,
    name: String,
    statement: String,
    answer: String,
    clue: String,
) -> Result<(), eyre::Report> {
    let mission = world
        .engine
        .mission(&name)
        .ok_or_else(|| eyre::eyre!("mission {name} is not registered in scenario world"))?;
    let mut gated = Mission::new(name.as_str()).with_task(
        Task::new(statement)
            .with_clue(clue)
            .with_resolver(move |given| given == answer),
    );
    if let Some(next) = mission.next() {
        gated = gated.with_next(next.clone());
    }
    world.register(gated);
    Ok(())
}
