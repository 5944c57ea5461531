//! Data models for trip plans and the session user.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation separate from the data
//! structures.
//!
//! # Examples
//!
//! ```rust
//! use wayfarer_core::models::{Plan, PlanId, PlanStatus};
//! use jiff::civil::date;
//!
//! let plan = Plan {
//!     id: PlanId::from("1"),
//!     title: "West Lake weekend".to_string(),
//!     destination: "Hangzhou".to_string(),
//!     start_date: date(2024, 3, 15),
//!     end_date: date(2024, 3, 17),
//!     participants: 4,
//!     budget: 3000.0,
//!     status: PlanStatus::NotStarted,
//! };
//! assert_eq!(plan.duration_days(), 3);
//! println!("{}", plan); // Markdown header, dates, party size and budget
//! ```

pub mod plan;
pub mod stats;
pub mod status;
pub mod update;
pub mod user;

#[cfg(test)]
mod tests;

pub use plan::{NewPlan, Plan, PlanId};
pub use stats::PlanStats;
pub use status::PlanStatus;
pub use update::PlanUpdate;
pub use user::User;
