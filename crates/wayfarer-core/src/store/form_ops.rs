//! Validated entry points taking form parameters.
//!
//! The raw operations in [`plan_ops`](super::plan_ops) trust their payloads
//! and treat a missing id as a silent no-op. Front ends go through these
//! instead: input is validated first and a missing plan is reported.

use log::info;

use super::PlanStore;
use crate::{
    error::{Result, WayfarerError},
    models::{Plan, PlanId},
    params::{CreatePlan, EditPlan, Id, ListPlans, TransitionPlan},
};

impl PlanStore {
    /// Validate the creation form and add the plan.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - when any form rule fails; the store is
    ///   left unchanged
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<Plan> {
        let new_plan = params.validate()?;
        let plan = self.add(new_plan);
        info!("Created plan {} '{}'", plan.id, plan.title);
        Ok(plan)
    }

    /// Validate the edit form against the stored plan and merge it.
    ///
    /// Returns the updated plan and the names of the fields the form set.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::PlanNotFound` - when no plan has the id
    /// * `WayfarerError::InvalidInput` - when any present field fails its rule
    pub fn edit_plan(&mut self, params: &EditPlan) -> Result<(Plan, Vec<&'static str>)> {
        let id = PlanId::from(params.id.as_str());
        let current = self.require(&id)?;
        let update = params.validate(current)?;
        let changes = update.changed_fields();

        self.update(&id, update);
        let plan = self.require(&id)?.clone();
        info!("Updated plan {id}: {changes:?}");
        Ok((plan, changes))
    }

    /// Remove a plan, returning what was deleted.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::PlanNotFound` - when no plan has the id
    pub fn delete_plan(&mut self, params: &Id) -> Result<Plan> {
        let id = PlanId::from(params);
        let plan = self.require(&id)?.clone();
        self.delete(&id);
        info!("Deleted plan {id} '{}'", plan.title);
        Ok(plan)
    }

    /// Look up a plan, reporting a missing id.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::PlanNotFound` - when no plan has the id
    pub fn show_plan(&self, params: &Id) -> Result<&Plan> {
        self.require(&PlanId::from(params))
    }

    /// Plans matching the status filter, in collection order.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - when the status string is unknown
    pub fn list_plans(&self, params: &ListPlans) -> Result<Vec<&Plan>> {
        Ok(self.filtered(params.status_filter()?))
    }

    /// Checked status change: to the named status, or the next stage when
    /// none is given.
    ///
    /// # Errors
    ///
    /// See [`transition`](Self::transition) and [`advance`](Self::advance).
    pub fn transition_plan(&mut self, params: &TransitionPlan) -> Result<Plan> {
        let id = PlanId::from(params.id.as_str());
        match params.target()? {
            Some(status) => self.transition(&id, status),
            None => self.advance(&id),
        }
    }

    fn require(&self, id: &PlanId) -> Result<&Plan> {
        self.get_by_id(id)
            .ok_or_else(|| WayfarerError::PlanNotFound { id: id.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::PlanStatus, store::PlanStoreBuilder};

    fn store() -> PlanStore {
        PlanStoreBuilder::new()
            .with_plans(crate::store::seed::sample_plans())
            .build()
            .unwrap()
    }

    fn create_params() -> CreatePlan {
        CreatePlan {
            title: "Xi'an weekend".to_string(),
            destination: "Xi'an, Shaanxi".to_string(),
            start_date: "2024-05-01".to_string(),
            end_date: "2024-05-03".to_string(),
            participants: 3,
            budget: 2800.0,
        }
    }

    #[test]
    fn test_create_plan() {
        let mut store = store();
        let plan = store.create_plan(&create_params()).unwrap();
        assert_eq!(plan.id, PlanId::from("4"));
        assert_eq!(plan.status, PlanStatus::NotStarted);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_create_plan_invalid_leaves_store_unchanged() {
        let mut store = store();
        let params = CreatePlan {
            participants: 21,
            ..create_params()
        };
        assert!(store.create_plan(&params).is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_edit_plan() {
        let mut store = store();
        let params = EditPlan {
            id: "1".to_string(),
            title: Some("West Lake long weekend".to_string()),
            participants: Some(5),
            ..Default::default()
        };
        let (plan, changes) = store.edit_plan(&params).unwrap();
        assert_eq!(plan.title, "West Lake long weekend");
        assert_eq!(plan.participants, 5);
        assert_eq!(changes, vec!["title", "participants"]);
    }

    #[test]
    fn test_edit_plan_missing() {
        let mut store = store();
        let params = EditPlan {
            id: "99".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            store.edit_plan(&params),
            Err(WayfarerError::PlanNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_plan() {
        let mut store = store();
        let deleted = store.delete_plan(&Id { id: "2".to_string() }).unwrap();
        assert_eq!(deleted.title, "Lijiang old town tour");
        assert!(store.show_plan(&Id { id: "2".to_string() }).is_err());
        assert!(store.delete_plan(&Id { id: "2".to_string() }).is_err());
    }

    #[test]
    fn test_list_plans_with_filter() {
        let store = store();
        let params = ListPlans {
            status: Some("in_progress".to_string()),
        };
        let plans = store.list_plans(&params).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, PlanId::from("2"));
    }

    #[test]
    fn test_transition_plan_defaults_to_next_stage() {
        let mut store = store();
        let params = TransitionPlan {
            id: "1".to_string(),
            status: None,
        };
        assert_eq!(
            store.transition_plan(&params).unwrap().status,
            PlanStatus::InProgress
        );

        let params = TransitionPlan {
            id: "1".to_string(),
            status: Some("not_started".to_string()),
        };
        assert!(matches!(
            store.transition_plan(&params),
            Err(WayfarerError::InvalidTransition { .. })
        ));
    }
}
