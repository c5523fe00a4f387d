use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schedule adherence for an item with a planned start and duration.
/// `NotApplicable` renders as an empty cell when either input is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadlineStatus {
    #[serde(rename = "")]
    NotApplicable,
    #[serde(rename = "On Time")]
    OnTime,
    #[serde(rename = "Late")]
    Late,
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotApplicable => "",
            Self::OnTime => "On Time",
            Self::Late => "Late",
        };
        f.write_str(label)
    }
}

/// Calendar-day addition of the planned duration onto the start date.
/// Undefined when either input is absent or the duration is negative.
pub fn due_date(start: Option<NaiveDate>, planned_days: Option<i64>) -> Option<NaiveDate> {
    let start = start?;
    let days = u64::try_from(planned_days?).ok()?;
    start.checked_add_days(Days::new(days))
}

/// Date-only comparison against an injected `today`; the due date itself
/// still counts as on time. The clock is never read here.
pub fn classify_deadline(
    start: Option<NaiveDate>,
    planned_days: Option<i64>,
    today: NaiveDate,
) -> DeadlineStatus {
    match due_date(start, planned_days) {
        None => DeadlineStatus::NotApplicable,
        Some(due) if today <= due => DeadlineStatus::OnTime,
        Some(_) => DeadlineStatus::Late,
    }
}
