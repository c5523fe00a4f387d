use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::tracker::core::deadline::due_date;
use crate::modules::tracker::core::progress::aggregate_progress;
use crate::modules::tracker::core::status::{ProgressStatus, classify_status};

/// What the statistics computation needs to know about one activity: its
/// effective (possibly subtask-derived) progress and its schedule fields.
#[derive(Debug, Clone, Copy)]
pub struct ActivitySnapshot {
    pub effective_progress: i32,
    pub planned_hours: i32,
    pub start_date: Option<NaiveDate>,
    pub planned_days: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total_activities: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub planned_hours: i64,
    /// Earliest activity start date.
    pub actual_start: Option<NaiveDate>,
    /// Latest activity due date (start + planned days).
    pub projected_finish: Option<NaiveDate>,
    pub overall_progress: i32,
    pub on_time: usize,
    pub late: usize,
}

/// Project dashboard numbers over a snapshot of its activities.
///
/// The on-time/late tally only considers activities that have a due date, and
/// a completed activity always counts as on time regardless of the date math.
/// That special case lives here and nowhere else; the per-row deadline column
/// stays date-only.
pub fn project_stats(activities: &[ActivitySnapshot], today: NaiveDate) -> ProjectStats {
    let mut stats = ProjectStats {
        total_activities: activities.len(),
        not_started: 0,
        in_progress: 0,
        completed: 0,
        cancelled: 0,
        planned_hours: 0,
        actual_start: None,
        projected_finish: None,
        overall_progress: 0,
        on_time: 0,
        late: 0,
    };

    for activity in activities {
        match classify_status(activity.effective_progress) {
            ProgressStatus::NotStarted => stats.not_started += 1,
            ProgressStatus::InProgress => stats.in_progress += 1,
            ProgressStatus::Completed => stats.completed += 1,
            ProgressStatus::Cancelled => stats.cancelled += 1,
        }

        stats.planned_hours += i64::from(activity.planned_hours);

        if let Some(start) = activity.start_date {
            stats.actual_start = Some(match stats.actual_start {
                Some(earliest) => earliest.min(start),
                None => start,
            });
        }

        if let Some(due) = due_date(activity.start_date, activity.planned_days) {
            stats.projected_finish = Some(match stats.projected_finish {
                Some(latest) => latest.max(due),
                None => due,
            });

            if classify_status(activity.effective_progress) == ProgressStatus::Completed {
                stats.on_time += 1;
            } else if today > due {
                stats.late += 1;
            } else {
                stats.on_time += 1;
            }
        }
    }

    let effectives: Vec<i32> = activities.iter().map(|a| a.effective_progress).collect();
    stats.overall_progress = aggregate_progress(&effectives);

    stats
}
