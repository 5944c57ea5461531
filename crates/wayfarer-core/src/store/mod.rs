//! The plan store: single source of truth for the trip plan collection.
//!
//! [`PlanStore`] is an explicit container. It is built once with
//! [`PlanStoreBuilder`] and handed by reference to whatever reads or mutates
//! plans; there is no global instance.
//!
//! ```text
//! ┌─────────────────┐  add / update / delete  ┌─────────────────┐
//! │   Form layer    │────────────────────────▶│    PlanStore    │
//! │   (params)      │                         │  Vec<Plan>      │
//! └─────────────────┘                         └────────┬────────┘
//!                                                      │ PlanEvent
//!          views recomputed on every call              ▼
//!   completed() / in_progress() / not_started()   subscribers
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: seeds the store (sample data, JSON file, or empty)
//! - [`plan_ops`]: identity assignment and the mutating operations
//! - [`form_ops`]: validated operations taking [`params`](crate::params)
//! - [`views`]: lookup, status filtering and the derived views
//! - [`events`]: [`PlanEvent`] and the subscription contract
//! - [`seed`]: the sample collection and seed file loading
//!
//! # Usage
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use wayfarer_core::{store::seed::sample_plans, PlanStatus, PlanStoreBuilder, PlanUpdate};
//!
//! let mut store = PlanStoreBuilder::new().with_plans(sample_plans()).build()?;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! store.subscribe(move |event, _plans| sink.borrow_mut().push(event.clone()));
//!
//! let id = store.not_started()[0].id.clone();
//! store.update(&id, PlanUpdate::status(PlanStatus::InProgress));
//!
//! assert_eq!(store.in_progress().len(), 2);
//! assert_eq!(seen.borrow().len(), 1);
//! # Ok::<(), wayfarer_core::WayfarerError>(())
//! ```

use std::fmt;

pub mod builder;
pub mod events;
pub mod form_ops;
pub mod plan_ops;
pub mod seed;
pub mod views;


pub use builder::PlanStoreBuilder;
pub use events::{Observer, PlanEvent, SubscriptionId};

use crate::models::Plan;
use events::Observers;

/// In-memory, insertion-ordered collection of plans.
pub struct PlanStore {
    pub(crate) plans: Vec<Plan>,
    pub(crate) next_id: u64,
    pub(crate) observers: Observers,
}

impl PlanStore {
    /// Creates a store holding `plans`, minting ids from `next_id` upward.
    pub(crate) fn new(plans: Vec<Plan>, next_id: u64) -> Self {
        Self {
            plans,
            next_id,
            observers: Observers::default(),
        }
    }

    /// Registers a callback invoked after every mutation that changed the
    /// collection.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&PlanEvent, &[Plan]) + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Notifies subscribers of `event` against the current collection.
    pub(crate) fn emit(&mut self, event: PlanEvent) {
        self.observers.notify(&event, &self.plans);
    }
}

impl fmt::Debug for PlanStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanStore")
            .field("plans", &self.plans)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}
