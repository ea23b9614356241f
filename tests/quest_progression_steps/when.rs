//! When steps for quest progression BDD scenarios.

use super::world::QuestWorld;
use rstest_bdd_macros::when;

#[when("the quest is started")]
fn quest_started(world: &mut QuestWorld) {
    world.last_result = Some(world.engine.start());
}

#[when("the current mission is passed")]
fn current_mission_passed(world: &mut QuestWorld) {
    world.last_result = Some(world.engine.pass_current());
}

#[when(r#"the answer "{answer}" is submitted"#)]
fn answer_submitted(world: &mut QuestWorld, answer: String) {
    let result = world.engine.resolve_current_task(&answer);
    world.last_accepted = result.as_ref().ok().copied();
    world.last_result = Some(result.map(|_| ()));
}
