//! Initial contents of the store.

use std::{collections::HashSet, path::Path};

use jiff::civil::date;

use crate::{
    error::{Result, WayfarerError},
    models::{Plan, PlanId, PlanStatus},
};

/// The fixed sample collection loaded when no seed file is configured.
pub fn sample_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::from("1"),
            title: "West Lake getaway".to_string(),
            destination: "Hangzhou, Zhejiang".to_string(),
            start_date: date(2024, 3, 15),
            end_date: date(2024, 3, 17),
            participants: 4,
            budget: 3000.0,
            status: PlanStatus::NotStarted,
        },
        Plan {
            id: PlanId::from("2"),
            title: "Lijiang old town tour".to_string(),
            destination: "Lijiang, Yunnan".to_string(),
            start_date: date(2024, 3, 20),
            end_date: date(2024, 3, 25),
            participants: 2,
            budget: 5000.0,
            status: PlanStatus::InProgress,
        },
        Plan {
            id: PlanId::from("3"),
            title: "Great Wall day trip".to_string(),
            destination: "Miyun, Beijing".to_string(),
            start_date: date(2024, 2, 28),
            end_date: date(2024, 2, 28),
            participants: 3,
            budget: 1500.0,
            status: PlanStatus::Completed,
        },
    ]
}

/// Read a JSON array of plans from `path`.
///
/// # Errors
///
/// Returns `WayfarerError::FileSystem` if the file cannot be read,
/// `WayfarerError::Serialization` if it is not a valid plan array, and
/// `WayfarerError::InvalidInput` if two plans share an id.
pub fn load_seed_file(path: &Path) -> Result<Vec<Plan>> {
    let contents = std::fs::read_to_string(path).map_err(|e| WayfarerError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    let plans: Vec<Plan> = serde_json::from_str(&contents)?;
    ensure_unique_ids(&plans)?;
    Ok(plans)
}

pub(crate) fn ensure_unique_ids(plans: &[Plan]) -> Result<()> {
    let mut seen = HashSet::new();
    for plan in plans {
        if !seen.insert(&plan.id) {
            return Err(WayfarerError::invalid_input("id")
                .with_reason(format!("duplicate plan id '{}' in seed data", plan.id)));
        }
    }
    Ok(())
}

/// First id the counter may hand out: one past the largest numeric seeded id.
///
/// A seeded `u64::MAX` has no successor and is left out; minting still skips
/// it as a live id.
pub(crate) fn first_free_id(plans: &[Plan]) -> u64 {
    plans
        .iter()
        .filter_map(|plan| plan.id.numeric())
        .filter_map(|id| id.checked_add(1))
        .max()
        .unwrap_or(1)
}
