#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::civil::date;

    use crate::{
        display::Profile,
        models::{NewPlan, Plan, PlanId, PlanStats, PlanStatus, PlanUpdate, User},
    };

    fn create_test_plan(status: PlanStatus) -> Plan {
        Plan {
            id: PlanId::from("42"),
            title: "Lijiang Old Town".to_string(),
            destination: "Lijiang, Yunnan".to_string(),
            start_date: date(2024, 3, 20),
            end_date: date(2024, 3, 25),
            participants: 2,
            budget: 5000.0,
            status,
        }
    }

    #[test]
    fn test_plan_status_from_str_variants() {
        assert_eq!(PlanStatus::from_str("not_started"), Ok(PlanStatus::NotStarted));
        assert_eq!(PlanStatus::from_str("NotStarted"), Ok(PlanStatus::NotStarted));
        assert_eq!(PlanStatus::from_str("in-progress"), Ok(PlanStatus::InProgress));
        assert_eq!(PlanStatus::from_str("inprogress"), Ok(PlanStatus::InProgress));
        assert_eq!(PlanStatus::from_str("done"), Ok(PlanStatus::Completed));
        assert!(PlanStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_plan_status_serde_is_snake_case() {
        let json = serde_json::to_string(&PlanStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        for status in PlanStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_plan_status_lifecycle() {
        assert!(PlanStatus::NotStarted.can_transition_to(PlanStatus::InProgress));
        assert!(PlanStatus::InProgress.can_transition_to(PlanStatus::Completed));
        assert!(PlanStatus::Completed.can_transition_to(PlanStatus::Completed));

        assert!(!PlanStatus::NotStarted.can_transition_to(PlanStatus::Completed));
        assert!(!PlanStatus::Completed.can_transition_to(PlanStatus::InProgress));
        assert!(!PlanStatus::InProgress.can_transition_to(PlanStatus::NotStarted));

        assert_eq!(PlanStatus::Completed.next(), None);
    }

    #[test]
    fn test_plan_json_shape() {
        let plan = create_test_plan(PlanStatus::InProgress);
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["id"], "42");
        assert_eq!(value["start_date"], "2024-03-20");
        assert_eq!(value["end_date"], "2024-03-25");
        assert_eq!(value["status"], "in_progress");
        assert_eq!(value["participants"], 2);
    }

    #[test]
    fn test_plan_missing_status_defaults_to_not_started() {
        let json = r#"{
            "id": "9",
            "title": "Great Wall day trip",
            "destination": "Miyun, Beijing",
            "start_date": "2024-02-28",
            "end_date": "2024-02-28",
            "participants": 3,
            "budget": 1500
        }"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.status, PlanStatus::NotStarted);
        assert_eq!(plan.duration_days(), 1);
    }

    #[test]
    fn test_duration_days() {
        let mut plan = create_test_plan(PlanStatus::NotStarted);
        assert_eq!(plan.duration_days(), 6);

        plan.end_date = date(2024, 3, 10);
        assert_eq!(plan.duration_days(), 1);
    }

    #[test]
    fn test_new_plan_with_id_keeps_fields() {
        let source = create_test_plan(PlanStatus::Completed);
        let new_plan = NewPlan {
            title: source.title.clone(),
            destination: source.destination.clone(),
            start_date: source.start_date,
            end_date: source.end_date,
            participants: source.participants,
            budget: source.budget,
            status: source.status,
        };
        assert_eq!(new_plan.with_id(PlanId::from("42")), source);
    }

    #[test]
    fn test_plan_update_merges_only_present_fields() {
        let mut plan = create_test_plan(PlanStatus::NotStarted);
        let update = PlanUpdate {
            budget: Some(6200.5),
            ..Default::default()
        };
        assert_eq!(update.changed_fields(), vec!["budget"]);

        update.apply_to(&mut plan);

        let mut expected = create_test_plan(PlanStatus::NotStarted);
        expected.budget = 6200.5;
        assert_eq!(plan, expected);
    }

    #[test]
    fn test_plan_update_is_empty() {
        assert!(PlanUpdate::default().is_empty());
        assert!(!PlanUpdate::status(PlanStatus::Completed).is_empty());
    }

    #[test]
    fn test_plan_stats_from_plans() {
        let plans = [
            create_test_plan(PlanStatus::NotStarted),
            create_test_plan(PlanStatus::InProgress),
            create_test_plan(PlanStatus::InProgress),
        ];
        let stats: PlanStats = plans.iter().collect();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(PlanStatus::NotStarted), 1);
        assert_eq!(stats.count(PlanStatus::InProgress), 2);
        assert_eq!(stats.count(PlanStatus::Completed), 0);
    }

    #[test]
    fn test_plan_display() {
        let plan = create_test_plan(PlanStatus::InProgress);
        let output = format!("{plan}");

        assert!(output.contains("# 42. Lijiang Old Town"));
        assert!(output.contains("- Status: ➤ In Progress"));
        assert!(output.contains("- Destination: Lijiang, Yunnan"));
        assert!(output.contains("- Dates: 2024-03-20 to 2024-03-25 (6 days)"));
        assert!(output.contains("- Participants: 2"));
        assert!(output.contains("- Budget: 5000.00"));
    }

    #[test]
    fn test_plan_stats_display() {
        let stats = PlanStats {
            total: 3,
            not_started: 1,
            in_progress: 1,
            completed: 1,
        };
        let output = format!("{stats}");
        assert!(output.contains("- Total plans: 3"));
        assert!(output.contains("- ✓ Completed: 1"));
    }

    #[test]
    fn test_profile_display() {
        let mut user = User::new("1", "alice");
        assert!(format!("{}", Profile(&user)).ends_with("- Avatar: none\n"));

        user.avatar = Some("https://img.example/alice.png".to_string());
        let output = format!("{}", Profile(&user));
        assert!(output.starts_with("# Profile\n"));
        assert!(output.contains("- Username: alice"));
        assert!(output.contains("- User ID: 1"));
        assert!(output.contains("- Avatar: https://img.example/alice.png"));
    }
}
