//! Display for map, footprint, itinerary and chat content.

use std::fmt;

use serde::Serialize;

use super::datetime::{LocalDateTime, LocalTime};
use crate::{
    chat::ChatMessage,
    models::Plan,
    overlay::{coordinates_for, markers_for, Coordinates, Footprint, ItineraryDay, MapMarker},
};

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.longitude, self.latitude)
    }
}

impl fmt::Display for MapMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({}) at {}",
            self.title,
            self.kind.caption(),
            self.position
        )
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} **{}** [{}]: {}",
            LocalDateTime(&self.timestamp),
            self.title,
            self.kind.as_str(),
            self.content
        )
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**{}** ({}): {}",
            self.role.as_str(),
            LocalTime(&self.sent_at),
            self.content
        )
    }
}

/// A plan's map: its center and the markers around it.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub destination: String,
    pub center: Coordinates,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    pub fn for_plan(plan: &Plan) -> Self {
        Self {
            destination: plan.destination.clone(),
            center: coordinates_for(&plan.destination),
            markers: markers_for(plan),
        }
    }
}

impl fmt::Display for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Map of {} ({})", self.destination, self.center)?;
        writeln!(f)?;
        for marker in &self.markers {
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

/// Footprints shown as a timeline.
pub struct Footprints(pub Vec<Footprint>);

impl fmt::Display for Footprints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No footprints recorded.");
        }
        writeln!(f, "## Footprints")?;
        writeln!(f)?;
        for footprint in &self.0 {
            write!(f, "{footprint}")?;
        }
        Ok(())
    }
}

/// Day-by-day outline of a trip.
pub struct Itinerary(pub Vec<ItineraryDay>);

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.last().map_or(0, |day| day.day);
        for day in &self.0 {
            writeln!(f, "## {} ({})", day.label(total), day.date)?;
            writeln!(f)?;
            for activity in &day.activities {
                writeln!(
                    f,
                    "- **{}**: {}",
                    activity.time_of_day.as_str(),
                    activity.description
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{overlay::itinerary_for, store::seed::sample_plans};

    #[test]
    fn test_map_view_lists_markers() {
        let output = MapView::for_plan(&sample_plans()[0]).to_string();

        assert!(output.starts_with("## Map of Hangzhou, Zhejiang (120.2090, 30.2460)"));
        assert!(output.contains("- **Hangzhou, Zhejiang hotel** (Accommodation) at 120.2190, 30.2410"));
        assert_eq!(output.matches("\n- **").count(), 4);
    }

    #[test]
    fn test_itinerary_headings() {
        let output = Itinerary(itinerary_for(&sample_plans()[0])).to_string();
        assert!(output.contains("## Day 1 (2024-03-15)"));
        assert!(output.contains("## Day 2 (2024-03-16)"));
        assert!(output.contains("## Last day (2024-03-17)"));
        assert!(output.contains("- **Morning**: Arrive and check in to the hotel"));
    }

    #[test]
    fn test_empty_footprints() {
        assert_eq!(Footprints(Vec::new()).to_string(), "No footprints recorded.\n");
    }
}
