// Shared entity fixtures for handler and store tests. Fields beyond the
// arguments get neutral defaults; tests mutate what they care about.

use chrono::Utc;
use uuid::Uuid;

use crate::modules::tracker::core::entities::{Activity, Person, Priority, Project, Subtask};

pub fn person(code: &str, name: &str) -> Person {
    let now = Utc::now();
    Person {
        id: Uuid::now_v7(),
        code: code.into(),
        name: name.into(),
        email: None,
        phone: None,
        job_title: None,
        department: None,
        sector: "Engineering".into(),
        active: true,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn project(code: &str, name: &str) -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::now_v7(),
        code: code.into(),
        name: name.into(),
        description: None,
        priority: Priority::Medium,
        owner_ids: vec![],
        planned_start: None,
        planned_end: None,
        progress: 0,
        approved: false,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn approved_project(code: &str, name: &str) -> Project {
    let mut p = project(code, name);
    p.approved = true;
    p
}

pub fn activity(code: &str, project_id: Uuid) -> Activity {
    let now = Utc::now();
    Activity {
        id: Uuid::now_v7(),
        code: code.into(),
        project_id,
        task: "Install racks".into(),
        assignee_ids: vec![],
        progress: 0,
        rollup_progress: 0,
        planned_hours: 0,
        used_hours: 0,
        planned_days: None,
        start_date: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn subtask(code: &str, activity_id: Uuid) -> Subtask {
    let now = Utc::now();
    Subtask {
        id: Uuid::now_v7(),
        code: code.into(),
        activity_id,
        name: "Pull cables".into(),
        assignee_ids: vec![],
        start_date: None,
        end_date: None,
        progress: 0,
        planned_hours: 0,
        used_hours: 0,
        planned_days: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}
