//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as "Created plan with ID" lines or the
//! empty-list message. Everything renders as markdown.
//!
//! - [`collections`]: the [`Plans`] list wrapper
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`] confirmation lines
//! - [`datetime`]: timestamp formatting in the system timezone
//! - [`models`]: Display implementations for domain models and the
//!   [`Profile`] card
//! - [`overlay`]: map, footprint, itinerary and chat rendering

pub mod collections;
pub mod datetime;
pub mod models;
pub mod overlay;
pub mod results;
pub mod status;

pub use collections::Plans;
pub use datetime::{LocalDateTime, LocalTime};
pub use models::Profile;
pub use overlay::{Footprints, Itinerary, MapView};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
