//! Randomly generated visit records ("footprints") around a destination.
//!
//! The randomness source is a parameter, so a seeded RNG gives a
//! reproducible trip log.

use jiff::{SignedDuration, Timestamp};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{map::coordinates_for, Coordinates};
use crate::models::Plan;

/// Footprints generated per call.
pub const FOOTPRINT_COUNT: usize = 8;

/// Largest distance from the destination on either axis, in degrees.
const JITTER: f64 = 0.01;

/// Footprints are dated up to this many whole days before `now`.
const MAX_DAYS_AGO: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintKind {
    Scenic,
    Food,
    Shopping,
    Hotel,
    Transportation,
    Photo,
}

impl FootprintKind {
    pub const ALL: [FootprintKind; 6] = [
        FootprintKind::Scenic,
        FootprintKind::Food,
        FootprintKind::Shopping,
        FootprintKind::Hotel,
        FootprintKind::Transportation,
        FootprintKind::Photo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FootprintKind::Scenic => "scenic",
            FootprintKind::Food => "food",
            FootprintKind::Shopping => "shopping",
            FootprintKind::Hotel => "hotel",
            FootprintKind::Transportation => "transportation",
            FootprintKind::Photo => "photo",
        }
    }

    /// Human-readable name used in footprint titles.
    pub fn label(&self) -> &'static str {
        match self {
            FootprintKind::Scenic => "Sightseeing",
            FootprintKind::Food => "Food",
            FootprintKind::Shopping => "Shopping",
            FootprintKind::Hotel => "Stay",
            FootprintKind::Transportation => "Transport",
            FootprintKind::Photo => "Photo",
        }
    }

    /// The canned notes a footprint of this kind can carry.
    pub fn notes(&self) -> &'static [&'static str; 3] {
        match self {
            FootprintKind::Scenic => &[
                "Visited a famous local landmark, the scenery was stunning",
                "Followed a guide through the local history and culture",
                "Climbed to the summit for an unforgettable panorama",
            ],
            FootprintKind::Food => &[
                "Tried the regional specialties, unique flavours",
                "Checked in at a popular restaurant with beautiful dishes",
                "Sampled street snacks with real local character",
            ],
            FootprintKind::Shopping => &[
                "Bought souvenirs at the local market",
                "Picked up handicrafts as gifts for friends",
                "Spent the afternoon browsing the shopping centre",
            ],
            FootprintKind::Hotel => &[
                "Checked into a comfortable, well-equipped hotel",
                "Stayed at a guesthouse with a distinctive style",
                "Attentive hotel service and a great night's sleep",
            ],
            FootprintKind::Transportation => &[
                "Took a traditional local ride to the sights",
                "Rented a car to explore the surrounding area",
                "Rode the sightseeing shuttle",
            ],
            FootprintKind::Photo => &[
                "Took photos in front of the landmark building",
                "Caught a beautiful sunset",
                "Captured the picture-perfect scenery",
            ],
        }
    }
}

/// One recorded stop during the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub id: String,
    pub position: Coordinates,
    pub title: String,
    pub kind: FootprintKind,
    pub content: String,
    pub timestamp: Timestamp,
}

/// Generate a trip log for `plan`, dated relative to the current time.
pub fn footprints_for<R: Rng + ?Sized>(plan: &Plan, rng: &mut R) -> Vec<Footprint> {
    footprints_at(plan, Timestamp::now(), rng)
}

/// Generate [`FOOTPRINT_COUNT`] footprints around the plan's destination,
/// each 0 to 2 whole days before `now`, sorted oldest first.
///
/// Ties keep generation order, so ids stay ascending within a day.
pub fn footprints_at<R: Rng + ?Sized>(plan: &Plan, now: Timestamp, rng: &mut R) -> Vec<Footprint> {
    let center = coordinates_for(&plan.destination);

    let mut footprints: Vec<Footprint> = (0..FOOTPRINT_COUNT)
        .map(|i| {
            let kind = FootprintKind::ALL[rng.random_range(0..FootprintKind::ALL.len())];
            let position = center.offset(
                rng.random_range(-JITTER..JITTER),
                rng.random_range(-JITTER..JITTER),
            );
            let notes = kind.notes();
            let content = notes[rng.random_range(0..notes.len())].to_string();
            let days_ago = rng.random_range(0..=MAX_DAYS_AGO);
            let timestamp = now
                .checked_sub(SignedDuration::from_hours(24 * days_ago))
                .unwrap_or(now);

            Footprint {
                id: format!("footprint-{i}"),
                position,
                title: format!("{} {}", kind.label(), i + 1),
                kind,
                content,
                timestamp,
            }
        })
        .collect();

    footprints.sort_by_key(|footprint| footprint.timestamp);
    footprints
}
