//! Aggregate counts over the plan collection.

use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus};

/// Per-status counts of a plan collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    /// Total number of plans
    pub total: usize,
    /// Plans that have not started
    pub not_started: usize,
    /// Plans underway
    pub in_progress: usize,
    /// Finished plans
    pub completed: usize,
}

impl PlanStats {
    /// Count for a single status.
    pub fn count(&self, status: PlanStatus) -> usize {
        match status {
            PlanStatus::NotStarted => self.not_started,
            PlanStatus::InProgress => self.in_progress,
            PlanStatus::Completed => self.completed,
        }
    }
}

impl<'a> FromIterator<&'a Plan> for PlanStats {
    fn from_iter<I: IntoIterator<Item = &'a Plan>>(iter: I) -> Self {
        let mut stats = Self::default();
        for plan in iter {
            stats.total += 1;
            match plan.status {
                PlanStatus::NotStarted => stats.not_started += 1,
                PlanStatus::InProgress => stats.in_progress += 1,
                PlanStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }
}
