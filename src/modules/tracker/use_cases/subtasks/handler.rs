use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::tracker::core::deadline::{DeadlineStatus, classify_deadline, due_date};
use crate::modules::tracker::core::entities::{Subtask, SubtaskPatch};
use crate::modules::tracker::core::status::{ProgressStatus, classify_status};
use crate::modules::tracker::use_cases::errors::ApplicationError;
use crate::modules::tracker::use_cases::rollup::handler::RollupHandler;
use crate::modules::tracker::use_cases::validation::{validate_planned_days, validate_progress};
use crate::shared::infrastructure::store::{ActivityStore, ProjectStore, SubtaskStore};

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubtask {
    pub code: String,
    pub activity_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub assignee_ids: Vec<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: Option<i32>,
    #[serde(default)]
    pub planned_hours: i32,
    #[serde(default)]
    pub used_hours: i32,
    pub planned_days: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubtaskView {
    #[serde(flatten)]
    pub subtask: Subtask,
    pub status: ProgressStatus,
    pub due_date: Option<NaiveDate>,
    pub deadline: DeadlineStatus,
    pub hours_variance: i32,
}

pub struct SubtasksHandler<TStore>
where
    TStore: ProjectStore + ActivityStore + SubtaskStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    rollup: RollupHandler<TStore>,
}

impl<TStore> SubtasksHandler<TStore>
where
    TStore: ProjectStore + ActivityStore + SubtaskStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            rollup: RollupHandler::new(store.clone()),
            store,
        }
    }

    fn view(subtask: Subtask, today: NaiveDate) -> SubtaskView {
        SubtaskView {
            status: classify_status(subtask.progress),
            due_date: due_date(subtask.start_date, subtask.planned_days),
            deadline: classify_deadline(subtask.start_date, subtask.planned_days, today),
            hours_variance: subtask.planned_hours - subtask.used_hours,
            subtask,
        }
    }

    pub async fn list(&self, today: NaiveDate) -> Result<Vec<SubtaskView>, ApplicationError> {
        let subtasks = self.store.list_subtasks().await?;
        Ok(subtasks.into_iter().map(|s| Self::view(s, today)).collect())
    }

    pub async fn list_by_activity(
        &self,
        activity_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<SubtaskView>, ApplicationError> {
        let subtasks = self.store.list_subtasks_by_activity(activity_id).await?;
        Ok(subtasks.into_iter().map(|s| Self::view(s, today)).collect())
    }

    /// Gate for any progress write underneath an activity: the owning project
    /// must have been approved.
    async fn ensure_project_approved(&self, activity_id: Uuid) -> Result<(), ApplicationError> {
        let activity = self.store.get_activity(activity_id).await?;
        let project = self.store.get_project(activity.project_id).await?;
        if !project.approved {
            return Err(ApplicationError::Domain(format!(
                "project {} is not approved; progress edits are locked",
                project.code
            )));
        }
        Ok(())
    }

    pub async fn create(&self, input: NewSubtask) -> Result<Subtask, ApplicationError> {
        let progress = input.progress.unwrap_or(0);
        validate_progress(progress)?;
        if let Some(days) = input.planned_days {
            validate_planned_days(days)?;
        }

        // owning activity must exist; a nonzero initial progress is an edit
        self.store.get_activity(input.activity_id).await?;
        if progress != 0 {
            self.ensure_project_approved(input.activity_id).await?;
        }

        let now = Utc::now();
        let subtask = Subtask {
            id: Uuid::now_v7(),
            code: input.code,
            activity_id: input.activity_id,
            name: input.name,
            assignee_ids: input.assignee_ids,
            start_date: input.start_date,
            end_date: input.end_date,
            progress,
            planned_hours: input.planned_hours,
            used_hours: input.used_hours,
            planned_days: input.planned_days,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_subtask(subtask.clone()).await?;
        self.rollup.after_subtask_change(subtask.activity_id).await?;
        Ok(subtask)
    }

    pub async fn update(&self, id: Uuid, patch: SubtaskPatch) -> Result<Subtask, ApplicationError> {
        let mut subtask = self.store.get_subtask(id).await?;

        if let Some(progress) = patch.progress {
            validate_progress(progress)?;
            self.ensure_project_approved(subtask.activity_id).await?;
        }
        if let Some(days) = patch.planned_days {
            validate_planned_days(days)?;
        }

        subtask.apply(patch, Utc::now());
        self.store.update_subtask(subtask.clone()).await?;
        self.rollup.after_subtask_change(subtask.activity_id).await?;
        Ok(subtask)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        let subtask = self.store.get_subtask(id).await?;
        self.store.delete_subtask(id).await?;
        self.rollup.after_subtask_change(subtask.activity_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod subtasks_handler_tests {
    use super::*;
    use crate::shared::infrastructure::store::in_memory::InMemoryEntityStore;
    use crate::tests::fixtures::entities::{activity, approved_project, project};
    use rstest::{fixture, rstest};

    struct Scenario {
        store: Arc<InMemoryEntityStore>,
        activity_id: Uuid,
        project_id: Uuid,
    }

    #[fixture]
    async fn approved() -> Scenario {
        let store = Arc::new(InMemoryEntityStore::new());
        let pr = approved_project("prj-0001", "Rollout");
        let project_id = pr.id;
        store.insert_project(pr).await.unwrap();
        let mut act = activity("act-0001", project_id);
        act.progress = 0;
        let activity_id = act.id;
        store.insert_activity(act).await.unwrap();
        Scenario {
            store,
            activity_id,
            project_id,
        }
    }

    fn new_subtask(code: &str, activity_id: Uuid) -> NewSubtask {
        NewSubtask {
            code: code.into(),
            activity_id,
            name: "Pull cables".into(),
            assignee_ids: vec![],
            start_date: None,
            end_date: None,
            progress: None,
            planned_hours: 0,
            used_hours: 0,
            planned_days: None,
            notes: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_roll_up_through_activity_and_project_on_create(
        #[future] approved: Scenario,
    ) {
        let s = approved.await;
        let handler = SubtasksHandler::new(s.store.clone());

        let mut first = new_subtask("st-0001", s.activity_id);
        first.progress = Some(0);
        handler.create(first).await.unwrap();
        let mut second = new_subtask("st-0002", s.activity_id);
        second.progress = Some(100);
        handler.create(second).await.unwrap();

        let act = s.store.get_activity(s.activity_id).await.unwrap();
        assert_eq!(act.rollup_progress, 50);
        assert_eq!(s.store.get_project(s.project_id).await.unwrap().progress, 50);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_roll_up_on_update_and_delete(#[future] approved: Scenario) {
        let s = approved.await;
        let handler = SubtasksHandler::new(s.store.clone());
        let created = handler.create(new_subtask("st-0001", s.activity_id)).await.unwrap();

        handler
            .update(
                created.id,
                SubtaskPatch {
                    progress: Some(100),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            s.store.get_project(s.project_id).await.unwrap().progress,
            100
        );

        handler.delete(created.id).await.unwrap();
        // back to the activity's own stored value
        assert_eq!(s.store.get_project(s.project_id).await.unwrap().progress, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_lock_progress_edits_behind_project_approval() {
        let store = Arc::new(InMemoryEntityStore::new());
        let pr = project("prj-0001", "Rollout");
        let project_id = pr.id;
        store.insert_project(pr).await.unwrap();
        let act = activity("act-0001", project_id);
        let activity_id = act.id;
        store.insert_activity(act).await.unwrap();
        let handler = SubtasksHandler::new(store.clone());

        // creating with default progress is fine on an unapproved project
        let created = handler.create(new_subtask("st-0001", activity_id)).await.unwrap();

        let result = handler
            .update(
                created.id,
                SubtaskPatch {
                    progress: Some(30),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(ApplicationError::Domain(_))));

        let mut eager = new_subtask("st-0002", activity_id);
        eager.progress = Some(30);
        assert!(matches!(
            handler.create(eager).await,
            Err(ApplicationError::Domain(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_validate_progress_at_the_write_boundary(#[future] approved: Scenario) {
        let s = approved.await;
        let handler = SubtasksHandler::new(s.store.clone());
        let mut input = new_subtask("st-0001", s.activity_id);
        input.progress = Some(-2);
        assert!(matches!(
            handler.create(input).await,
            Err(ApplicationError::Validation(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_serve_view_rows_with_derived_columns(#[future] approved: Scenario) {
        let s = approved.await;
        let handler = SubtasksHandler::new(s.store.clone());
        let mut input = new_subtask("st-0001", s.activity_id);
        input.progress = Some(100);
        input.start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        input.planned_days = Some(10);
        input.planned_hours = 8;
        input.used_hours = 6;
        handler.create(input).await.unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let views = handler.list_by_activity(s.activity_id, today).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].status, ProgressStatus::Completed);
        // the per-row deadline column stays date-only even for completed work
        assert_eq!(views[0].deadline, DeadlineStatus::Late);
        assert_eq!(views[0].hours_variance, 2);
    }
}
