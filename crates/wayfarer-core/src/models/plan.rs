//! Plan model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::PlanStatus;

/// Opaque identifier of a plan, assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier, for ids minted by the store.
    pub(crate) fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<&str> for PlanId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlanId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for PlanId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// A single trip: where, when, who, how much, and how far along it is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: PlanId,

    /// Display title of the trip
    pub title: String,

    /// Free-text destination
    pub destination: String,

    /// First day of the trip
    pub start_date: Date,

    /// Last day of the trip
    pub end_date: Date,

    /// Party size
    pub participants: u32,

    /// Budget, currency-agnostic
    pub budget: f64,

    /// Lifecycle status
    #[serde(default)]
    pub status: PlanStatus,
}

impl Plan {
    /// Number of calendar days the trip spans, counting both ends.
    ///
    /// Returns 1 for single-day trips and for plans whose end precedes their
    /// start.
    pub fn duration_days(&self) -> i64 {
        let span = self.end_date.since(self.start_date).map_or(0, |s| i64::from(s.get_days()));
        span.max(0) + 1
    }
}

/// Every plan field except the identifier; the input to
/// [`PlanStore::add`](crate::store::PlanStore::add).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPlan {
    pub title: String,
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
    pub participants: u32,
    pub budget: f64,
    #[serde(default)]
    pub status: PlanStatus,
}

impl NewPlan {
    /// Attach an identifier, producing the stored form.
    pub(crate) fn with_id(self, id: PlanId) -> Plan {
        Plan {
            id,
            title: self.title,
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            participants: self.participants,
            budget: self.budget,
            status: self.status,
        }
    }
}
