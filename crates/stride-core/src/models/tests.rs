#[cfg(test)]
mod model_tests {
    use jiff::{Timestamp, ToSpan};

    use crate::{
        error::WizardError,
        models::{
            Activity, Field, Milestone, OriginalValues, OutlineType, PlanDraft, Session,
            Visibility, WizardState, WizardUpdate,
        },
    };

    fn create_test_state() -> WizardState {
        let mut state = WizardState::new("goal");
        state.goal = "Run a 5k".to_string();
        state.emoji = "🏃".to_string();
        state.activities = vec![Activity::new("Running", "km")];
        state.milestones = vec![Milestone::new("First 2k without stopping")];
        state.finishing_date = Some(Timestamp::from_second(1767225600).unwrap()); // 2026-01-01
        state
    }

    #[test]
    fn test_new_state_defaults() {
        let state = WizardState::new("goal");
        assert_eq!(state.current_step, "goal");
        assert!(state.completed_steps.is_empty());
        assert_eq!(state.outline_type, OutlineType::TimesPerWeek);
        assert_eq!(state.times_per_week, 3);
        assert_eq!(state.visibility, Visibility::Public);
        assert!(!state.is_editing());
        assert!(state.original_values.is_none());
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut state = create_test_state();
        state.apply(WizardUpdate {
            emoji: Some("🔥".to_string()),
            times_per_week: Some(5),
            ..Default::default()
        });

        assert_eq!(state.goal, "Run a 5k");
        assert_eq!(state.emoji, "🔥");
        assert_eq!(state.times_per_week, 5);
        assert_eq!(state.activities.len(), 1);
    }

    #[test]
    fn test_apply_can_clear_nullable_fields() {
        let mut state = create_test_state();
        state.apply(WizardUpdate {
            finishing_date: Some(None),
            ..Default::default()
        });
        assert!(state.finishing_date.is_none());
    }

    #[test]
    fn test_state_json_fills_missing_fields_with_defaults() {
        let state: WizardState =
            serde_json::from_str(r#"{"current_step":"emoji","goal":"Read more"}"#)
                .expect("partial document should deserialize");
        assert_eq!(state.current_step, "emoji");
        assert_eq!(state.goal, "Read more");
        assert_eq!(state.times_per_week, 3);
        assert!(state.activities.is_empty());
    }

    #[test]
    fn test_snapshot_detects_scalar_changes() {
        let mut state = create_test_state();
        let original = OriginalValues::capture(&state);
        assert!(original.changed_fields(&state).is_empty());

        state.goal = "Run a 10k".to_string();
        state.visibility = Visibility::Private;
        assert_eq!(
            original.changed_fields(&state),
            vec![Field::Goal, Field::Visibility]
        );
    }

    #[test]
    fn test_snapshot_date_comparison() {
        let mut state = create_test_state();
        let original = OriginalValues::capture(&state);

        // Same instant, rebuilt from milliseconds
        let same = Timestamp::from_millisecond(
            state.finishing_date.unwrap().as_millisecond(),
        )
        .unwrap();
        state.finishing_date = Some(same);
        assert!(!original.is_changed(Field::FinishingDate, &state));

        state.finishing_date = Some(same.checked_add(1.hour()).unwrap());
        assert!(original.is_changed(Field::FinishingDate, &state));

        state.finishing_date = None;
        assert!(original.is_changed(Field::FinishingDate, &state));

        let mut undated = create_test_state();
        undated.finishing_date = None;
        let undated_original = OriginalValues::capture(&undated);
        assert!(!undated_original.is_changed(Field::FinishingDate, &undated));
    }

    #[test]
    fn test_snapshot_activities_compare_by_identity() {
        let mut state = create_test_state();
        state.activities.push(Activity::new("Stretching", "minutes"));
        let original = OriginalValues::capture(&state);

        // Reordering keeps the same identities
        state.activities.reverse();
        assert!(!original.is_changed(Field::Activities, &state));

        // Same length, different identity
        state.activities[0] = Activity::new("Swimming", "laps");
        assert!(original.is_changed(Field::Activities, &state));

        // Different length
        state.activities.pop();
        assert!(original.is_changed(Field::Activities, &state));
    }

    #[test]
    fn test_snapshot_detects_replaced_emoji_activity() {
        let mut state = create_test_state();
        state.activities = vec![Activity::parse("🏃:km").unwrap()];
        let original = OriginalValues::capture(&state);

        state.activities = vec![Activity::parse("🚴:km").unwrap()];
        assert!(original.is_changed(Field::Activities, &state));
    }

    #[test]
    fn test_snapshot_milestones_compare_structurally() {
        let mut state = create_test_state();
        let original = OriginalValues::capture(&state);

        state.milestones[0].progress = Some(50);
        assert!(original.is_changed(Field::Milestones, &state));
    }

    #[test]
    fn test_draft_requires_goal_and_activities() {
        let mut state = create_test_state();
        state.goal = "   ".to_string();
        let err = PlanDraft::from_state(&state).unwrap_err();
        assert!(matches!(err, WizardError::InvalidInput { ref field, .. } if field == "goal"));

        let mut state = create_test_state();
        state.activities.clear();
        let err = PlanDraft::from_state(&state).unwrap_err();
        assert!(matches!(err, WizardError::InvalidInput { ref field, .. } if field == "activities"));
    }

    #[test]
    fn test_draft_rejects_clashing_activity_ids() {
        let mut state = create_test_state();
        state.activities = vec![Activity::new("Run", "km"), Activity::new("Run!", "minutes")];
        let err = PlanDraft::from_state(&state).unwrap_err();
        assert!(matches!(err, WizardError::InvalidInput { ref field, .. } if field == "activities"));

        state.activities.pop();
        assert!(PlanDraft::from_state(&state).is_ok());
    }

    #[test]
    fn test_draft_times_per_week_outline() {
        let mut state = create_test_state();
        state.times_per_week = 4;
        let draft = PlanDraft::from_state(&state).expect("valid draft");
        assert_eq!(draft.times_per_week, Some(4));
        assert!(draft.sessions.is_empty());

        state.times_per_week = 0;
        assert!(PlanDraft::from_state(&state).is_err());
    }

    #[test]
    fn test_draft_fixed_schedule_outline() {
        let mut state = create_test_state();
        state.outline_type = OutlineType::Specific;
        assert!(PlanDraft::from_state(&state).is_err());

        state.generated_sessions = vec![Session {
            date: Timestamp::from_second(1764547200).unwrap(),
            activity_id: "running".to_string(),
            quantity: 2.0,
            descriptive_guide: "Easy pace".to_string(),
        }];
        let draft = PlanDraft::from_state(&state).expect("valid draft");
        assert_eq!(draft.times_per_week, None);
        assert_eq!(draft.sessions.len(), 1);

        state.generated_sessions[0].activity_id = "cycling".to_string();
        assert!(PlanDraft::from_state(&state).is_err());
    }

    #[test]
    fn test_draft_requires_coach_when_coached() {
        let mut state = create_test_state();
        state.is_coached = true;
        assert!(PlanDraft::from_state(&state).is_err());

        state.selected_coach_id = Some("coach-1".to_string());
        assert!(PlanDraft::from_state(&state).is_ok());
    }

    #[test]
    fn test_draft_converts_back_to_update() {
        let state = create_test_state();
        let draft = PlanDraft::from_state(&state).expect("valid draft");

        let mut restored = WizardState::new("overview");
        restored.apply(WizardUpdate::from(&draft));
        assert_eq!(restored.goal, state.goal);
        assert_eq!(restored.activities, state.activities);
        assert_eq!(restored.finishing_date, state.finishing_date);
        assert_eq!(restored.times_per_week, 3);
    }
}
