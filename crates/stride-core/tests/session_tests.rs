mod common;

use common::{create_test_session, open_session};
use stride_core::{
    models::{WizardState, WizardUpdate},
    plan_wizard::{ACTIVITIES, EMOJI, GOAL, OVERVIEW},
    CompleteStep, Database, GoToStep, SqliteStateStore, StateStore, WizardError,
};
use tempfile::TempDir;

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    {
        let mut session = open_session(&db_path);
        session
            .complete_step(CompleteStep::new(GOAL).with_updates(WizardUpdate::goal("Swim 1km")))
            .expect("complete goal");
    }

    let session = open_session(&db_path);
    let wizard = session.load().expect("load");
    assert_eq!(wizard.current_step(), EMOJI);
    assert_eq!(wizard.state().goal, "Swim 1km");
    assert!(wizard.state().is_completed(GOAL));
}

#[test]
fn test_fresh_session_starts_at_first_step() {
    let (_temp_dir, session) = create_test_session();
    let wizard = session.load().expect("load");
    assert_eq!(wizard.current_step(), GOAL);
    assert_eq!(wizard.state(), &WizardState::new(GOAL));
}

#[test]
fn test_keys_are_independent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let mut first = open_session(&db_path);
    let second = stride_core::WizardBuilder::new()
        .with_database_path(Some(&db_path))
        .with_key(Some("other-wizard"))
        .build()
        .expect("second session");

    first
        .go_to_step(GoToStep::new(ACTIVITIES))
        .expect("go to activities");
    assert_eq!(second.load().expect("load").current_step(), GOAL);
}

#[test]
fn test_stale_write_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let mut tab_a = SqliteStateStore::open(&db_path).expect("store a");
    let mut tab_b = SqliteStateStore::open(&db_path).expect("store b");

    let mut state = WizardState::new(GOAL);
    state.goal = "From tab A".to_string();
    assert_eq!(tab_a.save("shared", &state, 0).expect("first write"), 1);

    state.goal = "From tab B".to_string();
    let err = tab_b.save("shared", &state, 0).unwrap_err();
    assert!(matches!(
        err,
        WizardError::StaleState {
            expected: 0,
            found: 1,
            ..
        }
    ));

    let stored = tab_b.load("shared").expect("load").expect("state exists");
    assert_eq!(stored.state.goal, "From tab A");
    assert_eq!(stored.version, 1);
}

#[test]
fn test_session_rereads_before_each_write() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let mut tab_a = open_session(&db_path);
    let mut tab_b = open_session(&db_path);

    tab_a.update(WizardUpdate::goal("Shared goal")).expect("a");
    tab_b.go_to_step(GoToStep::new(OVERVIEW)).expect("b");

    let wizard = tab_a.load().expect("load");
    assert_eq!(wizard.state().goal, "Shared goal");
    assert_eq!(wizard.current_step(), OVERVIEW);
}

#[test]
fn test_events_are_recorded() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let mut session = open_session(&db_path);

    session.complete_step(CompleteStep::new(GOAL)).expect("goal");
    session.complete_step(CompleteStep::new(EMOJI)).expect("emoji");
    session.reset_state().expect("reset");

    let db = Database::new(&db_path).expect("open database");
    let names: Vec<String> = db
        .recent_events(10)
        .expect("events")
        .iter()
        .map(|e| e.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "create-plan-goal-completed",
            "create-plan-emoji-completed",
            "create-plan-reset",
        ]
    );
}

#[test]
fn test_clear_forgets_state() {
    let (_temp_dir, mut session) = create_test_session();
    session.update(WizardUpdate::goal("Forget me")).expect("update");
    session.clear().expect("clear");
    assert_eq!(session.load().expect("load").state().goal, "");
}
