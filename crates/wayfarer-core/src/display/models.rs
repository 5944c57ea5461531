//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it; plain terminals
//! still read it fine.

use std::fmt;

use crate::models::{Plan, PlanId, PlanStats, PlanStatus, User};

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Destination: {}", self.destination)?;

        let days = self.duration_days();
        let unit = if days == 1 { "day" } else { "days" };
        writeln!(
            f,
            "- Dates: {} to {} ({days} {unit})",
            self.start_date, self.end_date
        )?;
        writeln!(f, "- Participants: {}", self.participants)?;
        writeln!(f, "- Budget: {:.2}", self.budget)?;
        Ok(())
    }
}

impl Plan {
    /// One-line form used inside lists.
    pub(crate) fn fmt_list_item(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        writeln!(f, "- **Destination**: {}", self.destination)?;
        writeln!(f, "- **Dates**: {} to {}", self.start_date, self.end_date)?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for PlanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Overview")?;
        writeln!(f)?;
        writeln!(f, "- Total plans: {}", self.total)?;
        for status in PlanStatus::ALL {
            writeln!(f, "- {}: {}", status.with_icon(), self.count(status))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.username, self.id)
    }
}

/// Profile card for a user.
pub struct Profile<'a>(pub &'a User);

impl fmt::Display for Profile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user = self.0;
        writeln!(f, "# Profile")?;
        writeln!(f)?;
        writeln!(f, "- Username: {}", user.username)?;
        writeln!(f, "- User ID: {}", user.id)?;
        writeln!(f, "- Avatar: {}", user.avatar.as_deref().unwrap_or("none"))
    }
}
