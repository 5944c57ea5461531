//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::Plan;

/// Newtype wrapper for displaying a list of plans.
///
/// Handles empty collections with a "No plans found." line.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{display::Plans, store::seed::sample_plans, PlanStoreBuilder};
///
/// let store = PlanStoreBuilder::new().with_plans(sample_plans()).build()?;
/// let output = format!("{}", Plans::from(store.completed()));
/// assert!(output.contains("(ID: 3)"));
///
/// assert_eq!(format!("{}", Plans(vec![])), "No plans found.\n");
/// # Ok::<(), wayfarer_core::WayfarerError>(())
/// ```
pub struct Plans(pub Vec<Plan>);

impl From<Vec<&Plan>> for Plans {
    fn from(plans: Vec<&Plan>) -> Self {
        Self(plans.into_iter().cloned().collect())
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                plan.fmt_list_item(f)?;
            }
            Ok(())
        }
    }
}
