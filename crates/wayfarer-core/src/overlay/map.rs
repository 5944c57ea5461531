//! Destination lookup and map markers.

use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::models::Plan;

/// Where unknown destinations are placed.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates::new(116.397, 39.908);

const KNOWN_DESTINATIONS: &[(&str, Coordinates)] = &[
    ("Hangzhou, Zhejiang", Coordinates::new(120.209, 30.246)),
    ("Lijiang, Yunnan", Coordinates::new(100.233, 26.872)),
    ("Miyun, Beijing", Coordinates::new(116.843, 40.377)),
];

/// Coordinates of a destination, or [`DEFAULT_COORDINATES`] when it is not
/// in the table. Matching ignores surrounding whitespace.
pub fn coordinates_for(destination: &str) -> Coordinates {
    let destination = destination.trim();
    KNOWN_DESTINATIONS
        .iter()
        .find(|(name, _)| *name == destination)
        .map_or(DEFAULT_COORDINATES, |(_, coordinates)| *coordinates)
}

/// What a marker points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Hotel,
    Transportation,
    Attraction,
}

impl MarkerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Hotel => "hotel",
            MarkerKind::Transportation => "transportation",
            MarkerKind::Attraction => "attraction",
        }
    }

    /// Short caption shown in a marker's info window.
    pub fn caption(&self) -> &'static str {
        match self {
            MarkerKind::Hotel => "Accommodation",
            MarkerKind::Transportation => "Transport hub",
            MarkerKind::Attraction => "Sight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub position: Coordinates,
    pub title: String,
    pub kind: MarkerKind,
}

/// The four markers shown on a plan's map: a hotel, a station and two
/// attractions, at fixed offsets from the destination.
pub fn markers_for(plan: &Plan) -> Vec<MapMarker> {
    let center = coordinates_for(&plan.destination);
    let destination = plan.destination.trim();
    let marker = |id: &str, d_lon: f64, d_lat: f64, title: String, kind| MapMarker {
        id: id.to_string(),
        position: center.offset(d_lon, d_lat),
        title,
        kind,
    };

    vec![
        marker(
            "hotel",
            0.01,
            -0.005,
            format!("{destination} hotel"),
            MarkerKind::Hotel,
        ),
        marker(
            "transportation",
            -0.01,
            0.005,
            format!("{destination} station"),
            MarkerKind::Transportation,
        ),
        marker(
            "attraction1",
            0.02,
            0.01,
            format!("{destination} sight 1"),
            MarkerKind::Attraction,
        ),
        marker(
            "attraction2",
            -0.015,
            -0.015,
            format!("{destination} sight 2"),
            MarkerKind::Attraction,
        ),
    ]
}
