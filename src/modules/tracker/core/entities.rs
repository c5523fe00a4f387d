use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub sector: String,
    pub active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub owner_ids: Vec<Uuid>,
    pub planned_start: Option<NaiveDate>,
    pub planned_end: Option<NaiveDate>,
    /// Denormalized aggregate, refreshed by the rollup handler after every
    /// mutation underneath this project. Read paths that list projects
    /// recompute it from live children instead of trusting this column.
    pub progress: i32,
    pub approved: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub code: String,
    pub project_id: Uuid,
    pub task: String,
    pub assignee_ids: Vec<Uuid>,
    /// The activity's own value, directly editable only while it has no
    /// subtasks. Never overwritten by the rollup, so it survives as the
    /// fallback when the last subtask is deleted.
    pub progress: i32,
    /// Denormalized effective progress, refreshed by the rollup handler.
    /// Equals the subtask mean when subtasks exist, `progress` otherwise.
    pub rollup_progress: i32,
    pub planned_hours: i32,
    pub used_hours: i32,
    pub planned_days: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: Uuid,
    pub code: String,
    pub activity_id: Uuid,
    pub name: String,
    pub assignee_ids: Vec<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Authoritative leaf value for the rollup.
    pub progress: i32,
    pub planned_hours: i32,
    pub used_hours: i32,
    pub planned_days: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial updates, tRPC-style: a present field is written, an absent field is
/// left untouched. Optional columns cannot be cleared through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub sector: Option<String>,
    pub active: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub owner_ids: Option<Vec<Uuid>>,
    pub planned_start: Option<NaiveDate>,
    pub planned_end: Option<NaiveDate>,
    pub approved: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPatch {
    pub code: Option<String>,
    pub task: Option<String>,
    pub assignee_ids: Option<Vec<Uuid>>,
    pub progress: Option<i32>,
    pub planned_hours: Option<i32>,
    pub used_hours: Option<i32>,
    pub planned_days: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubtaskPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub assignee_ids: Option<Vec<Uuid>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: Option<i32>,
    pub planned_hours: Option<i32>,
    pub used_hours: Option<i32>,
    pub planned_days: Option<i64>,
    pub notes: Option<String>,
}

impl Person {
    pub fn apply(&mut self, patch: PersonPatch, now: DateTime<Utc>) {
        let PersonPatch {
            code,
            name,
            email,
            phone,
            job_title,
            department,
            sector,
            active,
            notes,
        } = patch;
        if let Some(v) = code {
            self.code = v;
        }
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = email {
            self.email = Some(v);
        }
        if let Some(v) = phone {
            self.phone = Some(v);
        }
        if let Some(v) = job_title {
            self.job_title = Some(v);
        }
        if let Some(v) = department {
            self.department = Some(v);
        }
        if let Some(v) = sector {
            self.sector = v;
        }
        if let Some(v) = active {
            self.active = v;
        }
        if let Some(v) = notes {
            self.notes = Some(v);
        }
        self.updated_at = now;
    }
}

impl Project {
    pub fn apply(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        let ProjectPatch {
            code,
            name,
            description,
            priority,
            owner_ids,
            planned_start,
            planned_end,
            approved,
            notes,
        } = patch;
        if let Some(v) = code {
            self.code = v;
        }
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = description {
            self.description = Some(v);
        }
        if let Some(v) = priority {
            self.priority = v;
        }
        if let Some(v) = owner_ids {
            self.owner_ids = v;
        }
        if let Some(v) = planned_start {
            self.planned_start = Some(v);
        }
        if let Some(v) = planned_end {
            self.planned_end = Some(v);
        }
        if let Some(v) = approved {
            self.approved = v;
        }
        if let Some(v) = notes {
            self.notes = Some(v);
        }
        self.updated_at = now;
    }
}

impl Activity {
    pub fn apply(&mut self, patch: ActivityPatch, now: DateTime<Utc>) {
        let ActivityPatch {
            code,
            task,
            assignee_ids,
            progress,
            planned_hours,
            used_hours,
            planned_days,
            start_date,
            notes,
        } = patch;
        if let Some(v) = code {
            self.code = v;
        }
        if let Some(v) = task {
            self.task = v;
        }
        if let Some(v) = assignee_ids {
            self.assignee_ids = v;
        }
        if let Some(v) = progress {
            self.progress = v;
        }
        if let Some(v) = planned_hours {
            self.planned_hours = v;
        }
        if let Some(v) = used_hours {
            self.used_hours = v;
        }
        if let Some(v) = planned_days {
            self.planned_days = Some(v);
        }
        if let Some(v) = start_date {
            self.start_date = Some(v);
        }
        if let Some(v) = notes {
            self.notes = Some(v);
        }
        self.updated_at = now;
    }
}

impl Subtask {
    pub fn apply(&mut self, patch: SubtaskPatch, now: DateTime<Utc>) {
        let SubtaskPatch {
            code,
            name,
            assignee_ids,
            start_date,
            end_date,
            progress,
            planned_hours,
            used_hours,
            planned_days,
            notes,
        } = patch;
        if let Some(v) = code {
            self.code = v;
        }
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = assignee_ids {
            self.assignee_ids = v;
        }
        if let Some(v) = start_date {
            self.start_date = Some(v);
        }
        if let Some(v) = end_date {
            self.end_date = Some(v);
        }
        if let Some(v) = progress {
            self.progress = v;
        }
        if let Some(v) = planned_hours {
            self.planned_hours = v;
        }
        if let Some(v) = used_hours {
            self.used_hours = v;
        }
        if let Some(v) = planned_days {
            self.planned_days = Some(v);
        }
        if let Some(v) = notes {
            self.notes = Some(v);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod entity_patch_tests {
    use super::*;
    use crate::tests::fixtures::entities::{activity, person, project, subtask};
    use rstest::rstest;

    #[rstest]
    fn it_should_leave_absent_fields_untouched() {
        let mut p = person("p-0001", "Alice");
        let before = p.clone();
        p.apply(PersonPatch::default(), Utc::now());
        assert_eq!(p.code, before.code);
        assert_eq!(p.name, before.name);
        assert_eq!(p.email, before.email);
    }

    #[rstest]
    fn it_should_write_present_fields_and_touch_updated_at() {
        let mut pr = project("prj-0001", "Rollout");
        let patch = ProjectPatch {
            name: Some("Rollout v2".into()),
            approved: Some(true),
            ..Default::default()
        };
        let now = Utc::now();
        pr.apply(patch, now);
        assert_eq!(pr.name, "Rollout v2");
        assert!(pr.approved);
        assert_eq!(pr.updated_at, now);
    }

    #[rstest]
    fn it_should_patch_activity_progress_and_schedule_fields() {
        let mut a = activity("act-0001", Uuid::now_v7());
        let patch = ActivityPatch {
            progress: Some(40),
            planned_days: Some(10),
            start_date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            ..Default::default()
        };
        a.apply(patch, Utc::now());
        assert_eq!(a.progress, 40);
        assert_eq!(a.planned_days, Some(10));
        assert!(a.start_date.is_some());
    }

    #[rstest]
    fn it_should_patch_subtask_hours() {
        let mut st = subtask("st-0001", Uuid::now_v7());
        let patch = SubtaskPatch {
            planned_hours: Some(16),
            used_hours: Some(9),
            ..Default::default()
        };
        st.apply(patch, Utc::now());
        assert_eq!(st.planned_hours - st.used_hours, 7);
    }
}
