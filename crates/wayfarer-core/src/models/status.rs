//! Lifecycle status of a trip plan.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Trip has not begun
    #[default]
    NotStarted,

    /// Trip is underway
    InProgress,

    /// Trip is over
    Completed,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "notstarted" | "not-started" => Ok(PlanStatus::NotStarted),
            "in_progress" | "inprogress" | "in-progress" => Ok(PlanStatus::InProgress),
            "completed" | "done" => Ok(PlanStatus::Completed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [PlanStatus; 3] = [
        PlanStatus::NotStarted,
        PlanStatus::InProgress,
        PlanStatus::Completed,
    ];

    /// Wire representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::NotStarted => "not_started",
            PlanStatus::InProgress => "in_progress",
            PlanStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfarer_core::models::PlanStatus;
    ///
    /// assert_eq!(PlanStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(PlanStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(PlanStatus::NotStarted.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanStatus::Completed => "✓ Completed",
            PlanStatus::InProgress => "➤ In Progress",
            PlanStatus::NotStarted => "○ Not Started",
        }
    }

    /// The status that follows this one, if any.
    pub fn next(&self) -> Option<PlanStatus> {
        match self {
            PlanStatus::NotStarted => Some(PlanStatus::InProgress),
            PlanStatus::InProgress => Some(PlanStatus::Completed),
            PlanStatus::Completed => None,
        }
    }

    /// Whether the lifecycle graph allows moving from `self` to `to`.
    ///
    /// Only single forward steps and self-transitions are allowed:
    /// `not_started → in_progress → completed`.
    pub fn can_transition_to(&self, to: PlanStatus) -> bool {
        *self == to || self.next() == Some(to)
    }
}
