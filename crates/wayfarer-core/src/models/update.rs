//! Partial update payload for plans.

use jiff::civil::Date;

use super::{Plan, PlanStatus};

/// Fields to merge into an existing plan. Absent fields are left unchanged.
///
/// There is no `id` field: identity cannot be changed by an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanUpdate {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub participants: Option<u32>,
    pub budget: Option<f64>,
    pub status: Option<PlanStatus>,
}

impl PlanUpdate {
    /// Update that only changes the status.
    pub fn status(status: PlanStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// True when the payload carries no fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the fields this payload sets, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.destination.is_some() {
            fields.push("destination");
        }
        if self.start_date.is_some() {
            fields.push("start_date");
        }
        if self.end_date.is_some() {
            fields.push("end_date");
        }
        if self.participants.is_some() {
            fields.push("participants");
        }
        if self.budget.is_some() {
            fields.push("budget");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        fields
    }

    /// Merge the present fields into `plan`.
    pub(crate) fn apply_to(self, plan: &mut Plan) {
        if let Some(title) = self.title {
            plan.title = title;
        }
        if let Some(destination) = self.destination {
            plan.destination = destination;
        }
        if let Some(start_date) = self.start_date {
            plan.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            plan.end_date = end_date;
        }
        if let Some(participants) = self.participants {
            plan.participants = participants;
        }
        if let Some(budget) = self.budget {
            plan.budget = budget;
        }
        if let Some(status) = self.status {
            plan.status = status;
        }
    }
}
