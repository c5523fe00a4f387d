use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::tracker::core::deadline::{DeadlineStatus, classify_deadline, due_date};
use crate::modules::tracker::core::entities::{Activity, ActivityPatch};
use crate::modules::tracker::core::status::{ProgressStatus, classify_status};
use crate::modules::tracker::use_cases::errors::ApplicationError;
use crate::modules::tracker::use_cases::rollup::handler::{
    RollupHandler, activity_effective_progress,
};
use crate::modules::tracker::use_cases::validation::{validate_planned_days, validate_progress};
use crate::shared::infrastructure::store::{ActivityStore, ProjectStore, SubtaskStore};

#[derive(Debug, Clone, Deserialize)]
pub struct NewActivity {
    pub code: String,
    pub project_id: Uuid,
    pub task: String,
    #[serde(default)]
    pub assignee_ids: Vec<Uuid>,
    pub progress: Option<i32>,
    #[serde(default)]
    pub planned_hours: i32,
    #[serde(default)]
    pub used_hours: i32,
    pub planned_days: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Row as rendered by the activity table: the entity plus every derived
/// column the pages used to compute inline.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    #[serde(flatten)]
    pub activity: Activity,
    pub effective_progress: i32,
    pub status: ProgressStatus,
    pub due_date: Option<NaiveDate>,
    pub deadline: DeadlineStatus,
    pub hours_variance: i32,
}

pub struct ActivitiesHandler<TStore>
where
    TStore: ProjectStore + ActivityStore + SubtaskStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    rollup: RollupHandler<TStore>,
}

impl<TStore> ActivitiesHandler<TStore>
where
    TStore: ProjectStore + ActivityStore + SubtaskStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            rollup: RollupHandler::new(store.clone()),
            store,
        }
    }

    async fn view(&self, activity: Activity, today: NaiveDate) -> Result<ActivityView, ApplicationError> {
        let effective = activity_effective_progress(&*self.store, &activity).await?;
        Ok(ActivityView {
            effective_progress: effective,
            status: classify_status(effective),
            due_date: due_date(activity.start_date, activity.planned_days),
            deadline: classify_deadline(activity.start_date, activity.planned_days, today),
            hours_variance: activity.planned_hours - activity.used_hours,
            activity,
        })
    }

    pub async fn list(&self, today: NaiveDate) -> Result<Vec<ActivityView>, ApplicationError> {
        let activities = self.store.list_activities().await?;
        let mut views = Vec::with_capacity(activities.len());
        for activity in activities {
            views.push(self.view(activity, today).await?);
        }
        Ok(views)
    }

    pub async fn list_by_project(
        &self,
        project_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<ActivityView>, ApplicationError> {
        let activities = self.store.list_activities_by_project(project_id).await?;
        let mut views = Vec::with_capacity(activities.len());
        for activity in activities {
            views.push(self.view(activity, today).await?);
        }
        Ok(views)
    }

    pub async fn create(&self, input: NewActivity) -> Result<Activity, ApplicationError> {
        let progress = input.progress.unwrap_or(0);
        validate_progress(progress)?;
        if let Some(days) = input.planned_days {
            validate_planned_days(days)?;
        }

        let project = self.store.get_project(input.project_id).await?;
        if progress != 0 && !project.approved {
            return Err(ApplicationError::Domain(format!(
                "project {} is not approved; progress cannot be set yet",
                project.code
            )));
        }

        let now = Utc::now();
        let activity = Activity {
            id: Uuid::now_v7(),
            code: input.code,
            project_id: input.project_id,
            task: input.task,
            assignee_ids: input.assignee_ids,
            progress,
            rollup_progress: progress,
            planned_hours: input.planned_hours,
            used_hours: input.used_hours,
            planned_days: input.planned_days,
            start_date: input.start_date,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_activity(activity.clone()).await?;
        self.rollup.after_activity_change(activity.project_id).await?;
        Ok(activity)
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: ActivityPatch,
    ) -> Result<Activity, ApplicationError> {
        let mut activity = self.store.get_activity(id).await?;

        if let Some(progress) = patch.progress {
            validate_progress(progress)?;
            let project = self.store.get_project(activity.project_id).await?;
            if !project.approved {
                return Err(ApplicationError::Domain(format!(
                    "project {} is not approved; progress edits are locked",
                    project.code
                )));
            }
            let subtasks = self.store.list_subtasks_by_activity(id).await?;
            if !subtasks.is_empty() {
                return Err(ApplicationError::Domain(
                    "activity has subtasks; progress must be edited at the subtask level".into(),
                ));
            }
        }
        if let Some(days) = patch.planned_days {
            validate_planned_days(days)?;
        }

        activity.apply(patch, Utc::now());
        self.store.update_activity(activity.clone()).await?;
        // same walk as a subtask change: refresh this activity's denormalized
        // column, then the owning project's
        self.rollup.after_subtask_change(activity.id).await?;
        self.store.get_activity(id).await.map_err(Into::into)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        let activity = self.store.get_activity(id).await?;
        self.store.delete_activity(id).await?;
        self.rollup.after_activity_change(activity.project_id).await?;
        Ok(())
    }
}
