// End-to-end rollup scenario through the application handlers: a project
// with one subtask-backed activity and one standalone activity, exercised
// the way the dashboard drives the API.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::tracker::core::entities::SubtaskPatch;
use crate::modules::tracker::core::status::ProgressStatus;
use crate::modules::tracker::use_cases::activities::handler::{ActivitiesHandler, NewActivity};
use crate::modules::tracker::use_cases::projects::handler::{NewProject, ProjectsHandler};
use crate::modules::tracker::use_cases::subtasks::handler::{NewSubtask, SubtasksHandler};
use crate::shared::infrastructure::store::ProjectStore;
use crate::shared::infrastructure::store::in_memory::InMemoryEntityStore;

fn new_project(code: &str) -> NewProject {
    NewProject {
        code: code.into(),
        name: "Factory rollout".into(),
        description: None,
        priority: Default::default(),
        owner_ids: vec![],
        planned_start: None,
        planned_end: None,
        approved: true,
        notes: None,
    }
}

fn new_activity(code: &str, project_id: uuid::Uuid, progress: Option<i32>) -> NewActivity {
    NewActivity {
        code: code.into(),
        project_id,
        task: "Install racks".into(),
        assignee_ids: vec![],
        progress,
        planned_hours: 0,
        used_hours: 0,
        planned_days: None,
        start_date: None,
        notes: None,
    }
}

fn new_subtask(code: &str, activity_id: uuid::Uuid, progress: Option<i32>) -> NewSubtask {
    NewSubtask {
        code: code.into(),
        activity_id,
        name: "Pull cables".into(),
        assignee_ids: vec![],
        start_date: None,
        end_date: None,
        progress,
        planned_hours: 0,
        used_hours: 0,
        planned_days: None,
        notes: None,
    }
}

#[tokio::test]
async fn rolls_subtask_progress_up_to_the_project_view() {
    let store = Arc::new(InMemoryEntityStore::new());
    let projects = ProjectsHandler::new(store.clone());
    let activities = ActivitiesHandler::new(store.clone());
    let subtasks = SubtasksHandler::new(store.clone());

    let project = projects.create(new_project("prj-0001")).await.unwrap();
    let backed = activities
        .create(new_activity("act-0001", project.id, None))
        .await
        .unwrap();
    activities
        .create(new_activity("act-0002", project.id, Some(80)))
        .await
        .unwrap();

    let open = subtasks
        .create(new_subtask("st-0001", backed.id, Some(0)))
        .await
        .unwrap();
    subtasks
        .create(new_subtask("st-0002", backed.id, Some(100)))
        .await
        .unwrap();

    // subtasks [0, 100] -> activity 50; activities (50, 80) -> project 65
    let view = projects.get(project.id).await.unwrap();
    assert_eq!(view.project.progress, 65);
    assert_eq!(view.status, ProgressStatus::InProgress);

    // the denormalized column agrees with the freshly computed value
    let stored = store.get_project(project.id).await.unwrap();
    assert_eq!(stored.progress, 65);

    // finishing the open subtask moves the whole chain
    subtasks
        .update(
            open.id,
            SubtaskPatch {
                progress: Some(100),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let view = projects.get(project.id).await.unwrap();
    assert_eq!(view.project.progress, 90); // round(mean(100, 80))

    let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let stats = projects.stats(project.id, today).await.unwrap();
    assert_eq!(stats.total_activities, 2);
    assert_eq!(stats.overall_progress, 90);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
}
