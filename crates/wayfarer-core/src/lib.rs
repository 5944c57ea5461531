//! Core library for the Wayfarer trip planner.
//!
//! This crate owns the trip plan collection and everything derived from it:
//! the in-memory [`PlanStore`] with its status views and change
//! notifications, form validation, the signed-in session, simulated map and
//! footprint content, and the simulated travel assistant.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Lists, operation results, maps and
//!   timelines
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use wayfarer_core::{params::CreatePlan, store::seed::sample_plans, PlanStatus, PlanStoreBuilder};
//!
//! let mut store = PlanStoreBuilder::new().with_plans(sample_plans()).build()?;
//! assert_eq!(store.len(), 3);
//!
//! let plan = store.create_plan(&CreatePlan {
//!     title: "Dali lakeside".to_string(),
//!     destination: "Dali, Yunnan".to_string(),
//!     start_date: "2024-06-01".to_string(),
//!     end_date: "2024-06-04".to_string(),
//!     participants: 2,
//!     budget: 4200.0,
//! })?;
//! println!("Created plan: {plan}");
//!
//! store.advance(&plan.id)?;
//! assert_eq!(store.in_progress().len(), 2);
//! assert_eq!(store.stats().count(PlanStatus::NotStarted), 1);
//! # Ok::<(), wayfarer_core::WayfarerError>(())
//! ```

pub mod chat;
pub mod display;
pub mod error;
pub mod models;
pub mod overlay;
pub mod params;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use chat::{ChatConfig, ChatMessage, ChatRole, ChatSession};
pub use display::{
    CreateResult, DeleteResult, Footprints, Itinerary, MapView, OperationStatus, Plans, Profile,
    UpdateResult,
};
pub use error::{Result, WayfarerError};
pub use models::{NewPlan, Plan, PlanId, PlanStats, PlanStatus, PlanUpdate, User};
pub use params::{CreatePlan, EditPlan, EditProfile, Id, ListPlans, Login, TransitionPlan};
pub use session::AuthSession;
pub use store::{PlanEvent, PlanStore, PlanStoreBuilder, SubscriptionId};
