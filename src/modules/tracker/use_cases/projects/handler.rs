use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::tracker::core::entities::{Priority, Project, ProjectPatch};
use crate::modules::tracker::core::stats::{ActivitySnapshot, ProjectStats, project_stats};
use crate::modules::tracker::core::status::{ProgressStatus, classify_status};
use crate::modules::tracker::use_cases::errors::ApplicationError;
use crate::modules::tracker::use_cases::rollup::handler::{
    activity_effective_progress, project_effective_progress,
};
use crate::shared::infrastructure::store::{ActivityStore, ProjectStore, SubtaskStore};

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub owner_ids: Vec<Uuid>,
    pub planned_start: Option<NaiveDate>,
    pub planned_end: Option<NaiveDate>,
    #[serde(default)]
    pub approved: bool,
    pub notes: Option<String>,
}

/// Project as served by read paths: the progress field carries a freshly
/// computed aggregate rather than the possibly-stale denormalized column.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub status: ProgressStatus,
}

pub struct ProjectsHandler<TStore>
where
    TStore: ProjectStore + ActivityStore + SubtaskStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ProjectsHandler<TStore>
where
    TStore: ProjectStore + ActivityStore + SubtaskStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<ProjectView>, ApplicationError> {
        let projects = self.store.list_projects().await?;
        let mut views = Vec::with_capacity(projects.len());
        for mut project in projects {
            project.progress = project_effective_progress(&*self.store, project.id).await?;
            views.push(ProjectView {
                status: classify_status(project.progress),
                project,
            });
        }
        Ok(views)
    }

    pub async fn get(&self, id: Uuid) -> Result<ProjectView, ApplicationError> {
        let mut project = self.store.get_project(id).await?;
        project.progress = project_effective_progress(&*self.store, id).await?;
        Ok(ProjectView {
            status: classify_status(project.progress),
            project,
        })
    }

    pub async fn create(&self, input: NewProject) -> Result<Project, ApplicationError> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::now_v7(),
            code: input.code,
            name: input.name,
            description: input.description,
            priority: input.priority,
            owner_ids: input.owner_ids,
            planned_start: input.planned_start,
            planned_end: input.planned_end,
            progress: 0,
            approved: input.approved,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_project(project.clone()).await?;
        Ok(project)
    }

    pub async fn update(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, ApplicationError> {
        let mut project = self.store.get_project(id).await?;
        project.apply(patch, Utc::now());
        self.store.update_project(project.clone()).await?;
        Ok(project)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        Ok(self.store.delete_project(id).await?)
    }

    /// Dashboard statistics over the project's activities. `today` is
    /// injected by the caller; nothing here reads the clock.
    pub async fn stats(
        &self,
        id: Uuid,
        today: NaiveDate,
    ) -> Result<ProjectStats, ApplicationError> {
        // 404 before an empty stats block for an unknown id
        self.store.get_project(id).await?;
        let activities = self.store.list_activities_by_project(id).await?;
        let mut snapshots = Vec::with_capacity(activities.len());
        for activity in &activities {
            snapshots.push(ActivitySnapshot {
                effective_progress: activity_effective_progress(&*self.store, activity).await?,
                planned_hours: activity.planned_hours,
                start_date: activity.start_date,
                planned_days: activity.planned_days,
            });
        }
        Ok(project_stats(&snapshots, today))
    }
}
