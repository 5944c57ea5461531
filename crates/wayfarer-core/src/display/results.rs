//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper pairs a confirmation line with the affected plan so every
//! interface reports create, update and delete the same way.

use std::fmt;

use crate::models::Plan;

/// Wrapper type for displaying the result of a plan creation.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{display::CreateResult, models::NewPlan, PlanStatus, PlanStoreBuilder};
/// use jiff::civil::date;
///
/// let mut store = PlanStoreBuilder::new().empty().build()?;
/// let plan = store.add(NewPlan {
///     title: "Spring break".to_string(),
///     destination: "Xiamen".to_string(),
///     start_date: date(2024, 4, 1),
///     end_date: date(2024, 4, 3),
///     participants: 2,
///     budget: 2400.0,
///     status: PlanStatus::NotStarted,
/// });
///
/// let output = format!("{}", CreateResult::new(plan));
/// assert!(output.contains("Created plan with ID: 1"));
/// # Ok::<(), wayfarer_core::WayfarerError>(())
/// ```
pub struct CreateResult {
    pub plan: Plan,
}

impl CreateResult {
    /// Create a new CreateResult wrapper.
    pub fn new(plan: Plan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for CreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.plan.id)?;
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

/// Wrapper type for displaying the result of an update, with the list of
/// changes that were applied.
pub struct UpdateResult {
    pub plan: Plan,
    pub changes: Vec<String>,
}

impl UpdateResult {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(plan: Plan, changes: Vec<String>) -> Self {
        Self { plan, changes }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.plan.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

/// Wrapper type for displaying the result of a deletion.
pub struct DeleteResult {
    pub plan: Plan,
}

impl DeleteResult {
    /// Create a new DeleteResult wrapper.
    pub fn new(plan: Plan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted plan '{}' (ID: {})", self.plan.title, self.plan.id)
    }
}
