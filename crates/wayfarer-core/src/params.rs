//! Parameter structures and form-layer validation.
//!
//! These are the interface-neutral shapes that front ends fill in from user
//! input: strings for dates and statuses, plain numbers for the rest. Each one
//! validates into the typed payload the store accepts, so the store itself
//! never sees malformed data and never has to fail.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   PlanStore     │
//! │  (clap derives) │───▶│  validate()     │───▶│  NewPlan /      │
//! │                 │    │                 │    │  PlanUpdate     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation failures are reported as [`WayfarerError::InvalidInput`] with
//! the offending field name.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WayfarerError},
    models::{NewPlan, Plan, PlanId, PlanStatus, PlanUpdate, User},
};

/// Longest accepted plan title, in characters.
pub const MAX_TITLE_LEN: usize = 50;

/// Largest accepted party size.
pub const MAX_PARTICIPANTS: u32 = 20;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

impl From<&Id> for PlanId {
    fn from(params: &Id) -> Self {
        PlanId::from(params.id.as_str())
    }
}

/// Parameters for creating a new plan.
///
/// New plans always start as `not_started`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Title of the trip (required, at most 50 characters)
    pub title: String,
    /// Destination (required)
    pub destination: String,
    /// First day, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`, not before `start_date`
    pub end_date: String,
    /// Party size, 1 to 20
    pub participants: u32,
    /// Budget, zero or more
    pub budget: f64,
}

impl CreatePlan {
    /// Validate the form and produce the store payload.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - naming the first field that fails
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfarer_core::{params::CreatePlan, PlanStatus};
    ///
    /// let params = CreatePlan {
    ///     title: "T".to_string(),
    ///     destination: "D".to_string(),
    ///     start_date: "2024-01-01".to_string(),
    ///     end_date: "2024-01-02".to_string(),
    ///     participants: 2,
    ///     budget: 100.0,
    /// };
    /// let new_plan = params.validate()?;
    /// assert_eq!(new_plan.status, PlanStatus::NotStarted);
    ///
    /// let bad = CreatePlan { participants: 0, ..params };
    /// assert_eq!(bad.validate().unwrap_err().field(), Some("participants"));
    /// # Ok::<(), wayfarer_core::WayfarerError>(())
    /// ```
    pub fn validate(&self) -> Result<NewPlan> {
        let title = validate_title(&self.title)?;
        let destination = validate_required("destination", &self.destination)?;
        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = parse_date("end_date", &self.end_date)?;
        ensure_date_order(start_date, end_date)?;
        validate_participants(self.participants)?;
        validate_budget(self.budget)?;

        Ok(NewPlan {
            title,
            destination,
            start_date,
            end_date,
            participants: self.participants,
            budget: self.budget,
            status: PlanStatus::NotStarted,
        })
    }
}

/// Parameters for editing an existing plan. Absent fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditPlan {
    /// Plan ID to edit (required)
    pub id: String,
    pub title: Option<String>,
    pub destination: Option<String>,
    /// New first day, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// New last day, `YYYY-MM-DD`
    pub end_date: Option<String>,
    pub participants: Option<u32>,
    pub budget: Option<f64>,
    /// New status ('not_started', 'in_progress' or 'completed'), assigned
    /// without lifecycle checks
    pub status: Option<String>,
}

impl EditPlan {
    /// Validate the present fields against `current` and produce the update.
    ///
    /// Date ordering is checked on the dates the plan will have after the
    /// edit, so moving only one end of the trip is still caught.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - naming the first field that fails
    pub fn validate(&self, current: &Plan) -> Result<PlanUpdate> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        let destination = self
            .destination
            .as_deref()
            .map(|value| validate_required("destination", value))
            .transpose()?;
        let start_date = self
            .start_date
            .as_deref()
            .map(|value| parse_date("start_date", value))
            .transpose()?;
        let end_date = self
            .end_date
            .as_deref()
            .map(|value| parse_date("end_date", value))
            .transpose()?;
        ensure_date_order(
            start_date.unwrap_or(current.start_date),
            end_date.unwrap_or(current.end_date),
        )?;
        if let Some(participants) = self.participants {
            validate_participants(participants)?;
        }
        if let Some(budget) = self.budget {
            validate_budget(budget)?;
        }
        let status = self.status.as_deref().map(parse_status).transpose()?;

        Ok(PlanUpdate {
            title,
            destination,
            start_date,
            end_date,
            participants: self.participants,
            budget: self.budget,
            status,
        })
    }
}

/// Parameters for listing plans, optionally narrowed to one status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    #[serde(default)]
    pub status: Option<String>,
}

impl ListPlans {
    /// Parse the status filter.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - when the status string is unknown
    pub fn status_filter(&self) -> Result<Option<PlanStatus>> {
        self.status.as_deref().map(parse_status).transpose()
    }
}

/// Parameters for a checked status change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionPlan {
    pub id: String,
    /// Target status; `None` means the next stage
    pub status: Option<String>,
}

impl TransitionPlan {
    /// Parse the target status, if one was given.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - when the status string is unknown
    pub fn target(&self) -> Result<Option<PlanStatus>> {
        self.status.as_deref().map(parse_status).transpose()
    }
}

/// Sign-in form. Only presence is checked; there are no real credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Login {
    /// Validate the form and produce the session user.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - when either field is blank
    pub fn validate(&self) -> Result<User> {
        let username = validate_required("username", &self.username)?;
        validate_required("password", &self.password)?;
        Ok(User::new("1", username))
    }
}

/// Profile edit form. Absent fields keep their current value; a blank
/// avatar removes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditProfile {
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl EditProfile {
    /// Validate the form against the signed-in user and produce the edited
    /// identity. The user id never changes.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - when a given username is blank
    pub fn validate(&self, current: &User) -> Result<User> {
        let mut user = current.clone();
        if let Some(username) = &self.username {
            user.username = validate_required("username", username)?;
        }
        if let Some(avatar) = &self.avatar {
            let avatar = avatar.trim();
            user.avatar = (!avatar.is_empty()).then(|| avatar.to_string());
        }
        Ok(user)
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.avatar.is_none()
    }
}

fn validate_required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WayfarerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_title(value: &str) -> Result<String> {
    let title = validate_required("title", value)?;
    let length = title.chars().count();
    if length > MAX_TITLE_LEN {
        return Err(WayfarerError::invalid_input("title").with_reason(format!(
            "must be at most {MAX_TITLE_LEN} characters, got {length}"
        )));
    }
    Ok(title)
}

fn parse_date(field: &str, value: &str) -> Result<Date> {
    let value = value.trim();
    // Date's parser also accepts full datetimes; the form only takes dates.
    if value.len() != 10 {
        return Err(WayfarerError::invalid_input(field)
            .with_reason(format!("'{value}' is not a YYYY-MM-DD date")));
    }
    Date::from_str(value).map_err(|e| {
        WayfarerError::invalid_input(field)
            .with_reason(format!("'{value}' is not a YYYY-MM-DD date: {e}"))
    })
}

fn ensure_date_order(start: Date, end: Date) -> Result<()> {
    if end < start {
        return Err(WayfarerError::invalid_input("end_date")
            .with_reason(format!("{end} is before the start date {start}")));
    }
    Ok(())
}

fn validate_participants(participants: u32) -> Result<()> {
    if !(1..=MAX_PARTICIPANTS).contains(&participants) {
        return Err(WayfarerError::invalid_input("participants").with_reason(format!(
            "must be between 1 and {MAX_PARTICIPANTS}, got {participants}"
        )));
    }
    Ok(())
}

fn validate_budget(budget: f64) -> Result<()> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(WayfarerError::invalid_input("budget")
            .with_reason(format!("must be a non-negative amount, got {budget}")));
    }
    Ok(())
}

fn parse_status(value: &str) -> Result<PlanStatus> {
    PlanStatus::from_str(value).map_err(|_| {
        WayfarerError::invalid_input("status").with_reason(format!(
            "Invalid status: {value}. Must be 'not_started', 'in_progress', or 'completed'"
        ))
    })
}
