//! Change notifications for store subscribers.

use crate::models::{Plan, PlanId};

/// What changed in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEvent {
    /// A plan was appended
    Added(PlanId),
    /// A plan's fields were merged or its status changed
    Updated(PlanId),
    /// A plan was removed
    Deleted(PlanId),
}

impl PlanEvent {
    /// Identifier of the affected plan.
    pub fn plan_id(&self) -> &PlanId {
        match self {
            PlanEvent::Added(id) | PlanEvent::Updated(id) | PlanEvent::Deleted(id) => id,
        }
    }
}

/// Handle returned by [`PlanStore::subscribe`](super::PlanStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer callback. Receives the event and the collection as it stands
/// after the mutation.
pub type Observer = Box<dyn FnMut(&PlanEvent, &[Plan])>;

/// Registered observers, invoked in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &PlanEvent, plans: &[Plan]) {
        for (_, observer) in &mut self.entries {
            observer(event, plans);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
