//! Day-by-day activity outline for a plan.

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use crate::models::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub time_of_day: TimeOfDay,
    pub description: String,
}

/// One calendar day of the trip. `day` counts from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: usize,
    pub date: Date,
    pub activities: Vec<Activity>,
}

impl ItineraryDay {
    /// Heading for the day: "Day 1", ..., with the final day of a multi-day
    /// trip of `total_days` called "Last day".
    pub fn label(&self, total_days: usize) -> String {
        if self.day > 1 && self.day == total_days {
            "Last day".to_string()
        } else {
            format!("Day {}", self.day)
        }
    }
}

const ARRIVAL: &[(TimeOfDay, &str)] = &[
    (TimeOfDay::Morning, "Arrive and check in to the hotel"),
    (TimeOfDay::Afternoon, "Visit nearby sights"),
    (TimeOfDay::Evening, "Try the local food"),
];

const SIGHTSEEING: &[(TimeOfDay, &str)] = &[
    (TimeOfDay::Morning, "Hiking"),
    (TimeOfDay::Afternoon, "Cultural activities"),
    (TimeOfDay::Evening, "Enjoy the night views"),
];

const DEPARTURE: &[(TimeOfDay, &str)] = &[
    (TimeOfDay::Morning, "Free time"),
    (TimeOfDay::Afternoon, "Pack up and head home"),
];

/// Most days an itinerary lists.
pub const MAX_ITINERARY_DAYS: usize = 30;

/// One entry per calendar day from the start date to the end date.
///
/// The first day is arrival, the last day of a multi-day trip is departure,
/// and every day in between is sightseeing. A plan whose end precedes its
/// start gets a single arrival day. Trips longer than
/// [`MAX_ITINERARY_DAYS`] list their first days followed by the departure
/// day, which keeps its real day number.
pub fn itinerary_for(plan: &Plan) -> Vec<ItineraryDay> {
    let total = usize::try_from(plan.duration_days()).unwrap_or(1);

    let mut days: Vec<ItineraryDay> = plan
        .start_date
        .series(1.day())
        .take(total.min(MAX_ITINERARY_DAYS))
        .enumerate()
        .map(|(index, date)| day_entry(index, date, total))
        .collect();

    if total > MAX_ITINERARY_DAYS {
        days.pop();
        days.push(day_entry(total - 1, plan.end_date, total));
    }
    days
}

fn day_entry(index: usize, date: Date, total: usize) -> ItineraryDay {
    let template = if index == 0 {
        ARRIVAL
    } else if index + 1 == total {
        DEPARTURE
    } else {
        SIGHTSEEING
    };
    ItineraryDay {
        day: index + 1,
        date,
        activities: template
            .iter()
            .map(|(time_of_day, description)| Activity {
                time_of_day: *time_of_day,
                description: (*description).to_string(),
            })
            .collect(),
    }
}
