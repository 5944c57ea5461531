//! Mutating operations of the PlanStore.

use log::{debug, warn};

use super::{PlanEvent, PlanStore};
use crate::{
    error::{Result, WayfarerError},
    models::{NewPlan, Plan, PlanId, PlanStatus, PlanUpdate},
};

impl PlanStore {
    /// Appends a new plan and returns it with its assigned id.
    ///
    /// Ids come from a monotonic counter, so an id is never handed out twice
    /// even after the plan holding it was deleted.
    pub fn add(&mut self, new_plan: NewPlan) -> Plan {
        let id = self.mint_id();
        let plan = new_plan.with_id(id);
        debug!("Adding plan {} '{}'", plan.id, plan.title);

        self.plans.push(plan.clone());
        self.emit(PlanEvent::Added(plan.id.clone()));
        plan
    }

    /// Merges the fields present in `update` into the plan with `id`.
    ///
    /// Does nothing if no plan has that id.
    pub fn update(&mut self, id: &PlanId, update: PlanUpdate) {
        let Some(plan) = self.plans.iter_mut().find(|plan| &plan.id == id) else {
            debug!("Update ignored, plan {id} not found");
            return;
        };

        debug!("Updating plan {id}: {:?}", update.changed_fields());
        update.apply_to(plan);
        self.emit(PlanEvent::Updated(id.clone()));
    }

    /// Removes the plan with `id`. Does nothing if no plan has that id.
    pub fn delete(&mut self, id: &PlanId) {
        let Some(index) = self.plans.iter().position(|plan| &plan.id == id) else {
            debug!("Delete ignored, plan {id} not found");
            return;
        };

        let removed = self.plans.remove(index);
        debug!("Deleted plan {} '{}'", removed.id, removed.title);
        self.emit(PlanEvent::Deleted(removed.id));
    }

    /// Moves a plan along its lifecycle, `not_started → in_progress →
    /// completed`.
    ///
    /// Unlike [`update`](Self::update), which assigns any status, this checks
    /// the move against [`PlanStatus::can_transition_to`].
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::PlanNotFound` if no plan has `id`, and
    /// `WayfarerError::InvalidTransition` if the move skips or reverses a
    /// stage. The plan is unchanged on error.
    pub fn transition(&mut self, id: &PlanId, to: PlanStatus) -> Result<Plan> {
        let plan = self
            .plans
            .iter_mut()
            .find(|plan| &plan.id == id)
            .ok_or_else(|| WayfarerError::PlanNotFound { id: id.clone() })?;

        let from = plan.status;
        if !from.can_transition_to(to) {
            warn!("Rejected status change of plan {id}: {from} -> {to}");
            return Err(WayfarerError::InvalidTransition {
                id: id.clone(),
                from,
                to,
            });
        }

        plan.status = to;
        let plan = plan.clone();
        if from != to {
            debug!("Plan {id} moved {from} -> {to}");
            self.emit(PlanEvent::Updated(id.clone()));
        }
        Ok(plan)
    }

    /// Advances a plan to the next lifecycle stage.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::PlanNotFound` if no plan has `id`, and
    /// `WayfarerError::InvalidInput` on `status` if the plan is already
    /// completed.
    pub fn advance(&mut self, id: &PlanId) -> Result<Plan> {
        let current = self
            .get_by_id(id)
            .map(|plan| plan.status)
            .ok_or_else(|| WayfarerError::PlanNotFound { id: id.clone() })?;

        match current.next() {
            Some(next) => self.transition(id, next),
            None => Err(WayfarerError::invalid_input("status")
                .with_reason(format!("plan {id} is already {current}"))),
        }
    }

    /// Takes the next id from the counter, skipping any value already live.
    ///
    /// Past `u64::MAX` the counter wraps to 1.
    fn mint_id(&mut self) -> PlanId {
        loop {
            let candidate = PlanId::from(self.next_id);
            self.next_id = self.next_id.checked_add(1).unwrap_or(1);
            if self.get_by_id(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
