use std::{cell::RefCell, collections::HashSet, rc::Rc};

use jiff::civil::date;
use wayfarer_core::{
    overlay::{itinerary_for, markers_for},
    params::{CreatePlan, EditPlan, Id},
    NewPlan, PlanEvent, PlanId, PlanStatus, PlanStoreBuilder, PlanUpdate, WayfarerError,
};

mod common;

use common::{create_sample_store, write_seed_file};

fn scenario_plan() -> NewPlan {
    NewPlan {
        title: "T".to_string(),
        destination: "D".to_string(),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 2),
        participants: 2,
        budget: 100.0,
        status: PlanStatus::NotStarted,
    }
}

#[test]
fn test_seeded_delete_then_add_scenario() {
    let mut store = create_sample_store();
    let statuses: Vec<_> = store.plans().iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        [
            PlanStatus::NotStarted,
            PlanStatus::InProgress,
            PlanStatus::Completed
        ]
    );

    let completed = store.filtered(Some(PlanStatus::Completed));
    assert_eq!(completed.len(), 1);
    let completed_id = completed[0].id.clone();

    store.delete(&completed_id);
    assert!(store.filtered(Some(PlanStatus::Completed)).is_empty());

    let existing: HashSet<PlanId> = store.plans().iter().map(|p| p.id.clone()).collect();
    let added = store.add(scenario_plan());
    assert!(!existing.contains(&added.id));
    assert_ne!(added.id, completed_id);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get_by_id(&added.id), Some(&added));
}

#[test]
fn test_views_partition_after_mixed_operations() {
    let mut store = create_sample_store();
    let first = store.add(scenario_plan());
    store.update(&first.id, PlanUpdate::status(PlanStatus::Completed));
    store.delete(&PlanId::from("2"));
    store.add(scenario_plan());
    store.update(&PlanId::from("1"), PlanUpdate::status(PlanStatus::InProgress));

    let mut seen = HashSet::new();
    let views = [store.completed(), store.in_progress(), store.not_started()];
    let view_total: usize = views.iter().map(Vec::len).sum();
    for plan in views.iter().flatten() {
        assert!(seen.insert(plan.id.clone()), "{} appears twice", plan.id);
    }

    assert_eq!(view_total, store.len());
    let all: HashSet<PlanId> = store.plans().iter().map(|p| p.id.clone()).collect();
    assert_eq!(seen, all);
}

#[test]
fn test_form_workflow_with_subscriber() {
    let mut store = create_sample_store();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event, plans| {
        sink.borrow_mut().push((event.clone(), plans.len()));
    });

    let plan = store
        .create_plan(&CreatePlan {
            title: "Harbin ice festival".to_string(),
            destination: "Harbin, Heilongjiang".to_string(),
            start_date: "2025-01-05".to_string(),
            end_date: "2025-01-08".to_string(),
            participants: 6,
            budget: 9000.0,
        })
        .expect("Failed to create plan");

    store
        .edit_plan(&EditPlan {
            id: plan.id.to_string(),
            budget: Some(9500.0),
            ..Default::default()
        })
        .expect("Failed to edit plan");

    store.advance(&plan.id).expect("Failed to advance plan");
    store
        .delete_plan(&Id {
            id: plan.id.to_string(),
        })
        .expect("Failed to delete plan");

    let events = events.borrow();
    assert_eq!(
        *events,
        vec![
            (PlanEvent::Added(plan.id.clone()), 4),
            (PlanEvent::Updated(plan.id.clone()), 4),
            (PlanEvent::Updated(plan.id.clone()), 4),
            (PlanEvent::Deleted(plan.id.clone()), 3),
        ]
    );
}

#[test]
fn test_seed_file_round_trip_through_builder() {
    let store = create_sample_store();
    let json = serde_json::to_string_pretty(store.plans()).expect("Failed to serialize");
    let (_temp_dir, path) = write_seed_file(&json);

    let mut reloaded = PlanStoreBuilder::new()
        .with_seed_file(Some(&path))
        .build()
        .expect("Failed to load seed file");
    assert_eq!(reloaded.plans(), store.plans());

    let added = reloaded.add(scenario_plan());
    assert_eq!(added.id, PlanId::from("4"));
}

#[test]
fn test_seed_file_with_largest_numeric_id() {
    let json = r#"[{
        "id": "18446744073709551615",
        "title": "Edge",
        "destination": "Nowhere",
        "start_date": "2024-01-01",
        "end_date": "2024-01-02",
        "participants": 1,
        "budget": 0.0
    }]"#;
    let (_temp_dir, path) = write_seed_file(json);

    let mut store = PlanStoreBuilder::new()
        .with_seed_file(Some(&path))
        .build()
        .expect("Failed to load seed file");

    let added = store.add(scenario_plan());
    assert_eq!(added.id, PlanId::from("1"));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_seed_file_with_missing_status_defaults() {
    let (_temp_dir, path) = write_seed_file(
        r#"[{
            "id": "trip-a",
            "title": "Chengdu food tour",
            "destination": "Chengdu, Sichuan",
            "start_date": "2024-09-01",
            "end_date": "2024-09-03",
            "participants": 2,
            "budget": 2000
        }]"#,
    );

    let mut store = PlanStoreBuilder::new()
        .with_seed_file(Some(&path))
        .build()
        .expect("Failed to load seed file");
    assert_eq!(store.not_started().len(), 1);

    let added = store.add(scenario_plan());
    assert_eq!(added.id, PlanId::from("1"));
}

#[test]
fn test_invalid_seed_file_is_reported() {
    let (_temp_dir, path) = write_seed_file("{ not json");
    let result = PlanStoreBuilder::new().with_seed_file(Some(&path)).build();
    assert!(matches!(result, Err(WayfarerError::Serialization { .. })));
}

#[test]
fn test_overlay_follows_plan_edits() {
    let mut store = create_sample_store();
    let id = PlanId::from("3");
    store.update(
        &id,
        PlanUpdate {
            end_date: Some(date(2024, 3, 2)),
            destination: Some("Hangzhou, Zhejiang".to_string()),
            ..Default::default()
        },
    );

    let plan = store.get_by_id(&id).expect("Plan should exist");
    assert_eq!(itinerary_for(plan).len(), 4);
    assert_eq!(markers_for(plan)[0].title, "Hangzhou, Zhejiang hotel");
}
