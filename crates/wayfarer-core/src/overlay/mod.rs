//! Simulated map and trip-log content derived from a plan.
//!
//! Nothing here touches the store. Each function takes a [`Plan`] and
//! produces presentation data for it:
//!
//! - [`map`]: destination coordinates and the fixed point-of-interest markers
//! - [`footprints`]: randomly generated visit records around the destination
//! - [`itinerary`]: a day-by-day activity outline between start and end dates
//!
//! [`Plan`]: crate::models::Plan

use serde::{Deserialize, Serialize};

pub mod footprints;
pub mod itinerary;
pub mod map;

pub use footprints::{footprints_at, footprints_for, Footprint, FootprintKind, FOOTPRINT_COUNT};
pub use itinerary::{itinerary_for, Activity, ItineraryDay, TimeOfDay, MAX_ITINERARY_DAYS};
pub use map::{coordinates_for, markers_for, MapMarker, MarkerKind, DEFAULT_COORDINATES};

/// A point on the map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// This point moved by the given deltas.
    pub fn offset(self, d_longitude: f64, d_latitude: f64) -> Self {
        Self::new(self.longitude + d_longitude, self.latitude + d_latitude)
    }
}
