//! Then steps for quest progression BDD scenarios.

use super::world::QuestWorld;
use quester::quest::domain::QuestStatus;
use rstest_bdd_macros::then;

#[then(r#"the current mission is "{name}""#)]
fn current_mission_is(world: &QuestWorld, name: String) -> Result<(), eyre::Report> {
    let current = world
        .engine
        .current()
        .ok_or_else(|| eyre::eyre!("no current mission"))?;

    if current.name().as_str() != name {
        return Err(eyre::eyre!(
            "expected current mission {name}, found {}",
            current.name()
        ));
    }
    Ok(())
}

#[then(r#"the quest status is "{status}""#)]
fn quest_status_is(world: &QuestWorld, status: String) -> Result<(), eyre::Report> {
    let expected = QuestStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    if world.engine.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            world.engine.status()
        ));
    }
    Ok(())
}

#[then(r#"the hook log reads "{entries}""#)]
fn hook_log_reads(world: &QuestWorld, entries: String) -> Result<(), eyre::Report> {
    let log = world.hook_log()?;
    if log != entries {
        return Err(eyre::eyre!("expected hook log `{entries}`, found `{log}`"));
    }
    Ok(())
}

#[then(r#"the clue is "{clue}""#)]
fn clue_is(world: &QuestWorld, clue: String) -> Result<(), eyre::Report> {
    if world.engine.clue() != clue {
        return Err(eyre::eyre!(
            "expected clue `{clue}`, found `{}`",
            world.engine.clue()
        ));
    }
    Ok(())
}

#[then("there is no clue")]
fn there_is_no_clue(world: &QuestWorld) -> Result<(), eyre::Report> {
    if !world.engine.clue().is_empty() {
        return Err(eyre::eyre!(
            "expected no clue, found `{}`",
            world.engine.clue()
        ));
    }
    Ok(())
}

#[then("the answer is accepted")]
fn answer_accepted(world: &QuestWorld) -> Result<(), eyre::Report> {
    match world.last_accepted {
        Some(true) => Ok(()),
        other => Err(eyre::eyre!("expected an accepted answer, got {other:?}")),
    }
}

#[then("the answer is rejected")]
fn answer_rejected(world: &QuestWorld) -> Result<(), eyre::Report> {
    match world.last_accepted {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected a rejected answer, got {other:?}")),
    }
}

#[then(r#"the operation fails with "{message}""#)]
fn operation_fails_with(world: &QuestWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no operation was attempted"))?;

    match result {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected failure `{message}`, got {other:?}")),
    }
}
