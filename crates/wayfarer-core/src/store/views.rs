//! Read access: lookup, status filtering and the derived views.
//!
//! Every view is a pure filter over the current collection, recomputed on
//! each call, so it can never drift from the base data.

use super::PlanStore;
use crate::models::{Plan, PlanId, PlanStats, PlanStatus};

impl PlanStore {
    /// All plans in insertion order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Number of plans in the collection.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// True when the collection holds no plans.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Looks up a plan by exact id.
    pub fn get_by_id(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == id)
    }

    /// The whole collection when `status` is `None`, otherwise the plans with
    /// that status. Order follows the collection.
    pub fn filtered(&self, status: Option<PlanStatus>) -> Vec<&Plan> {
        match status {
            None => self.plans.iter().collect(),
            Some(status) => self.with_status(status),
        }
    }

    /// Plans whose status is `completed`.
    pub fn completed(&self) -> Vec<&Plan> {
        self.with_status(PlanStatus::Completed)
    }

    /// Plans whose status is `in_progress`.
    pub fn in_progress(&self) -> Vec<&Plan> {
        self.with_status(PlanStatus::InProgress)
    }

    /// Plans whose status is `not_started`.
    pub fn not_started(&self) -> Vec<&Plan> {
        self.with_status(PlanStatus::NotStarted)
    }

    /// Per-status counts of the current collection.
    pub fn stats(&self) -> PlanStats {
        self.plans.iter().collect()
    }

    fn with_status(&self, status: PlanStatus) -> Vec<&Plan> {
        self.plans
            .iter()
            .filter(|plan| plan.status == status)
            .collect()
    }
}
