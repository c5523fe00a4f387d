//! Recomputation orchestrator: after any subtask or activity mutation, walk
//! up the ownership chain and persist refreshed aggregates.
//!
//! Each write completes before the next level's reads, so the project step
//! always observes the post-write state of the activities. Any store failure
//! aborts the walk; the error names the layer that could not be refreshed.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::modules::tracker::core::entities::Activity;
use crate::modules::tracker::core::progress::{aggregate_progress, effective_activity_progress};
use crate::shared::infrastructure::store::{
    ActivityStore, ProjectStore, StoreError, SubtaskStore,
};

#[derive(Debug, Error)]
pub enum RollupError {
    #[error("failed to refresh activity aggregate: {0}")]
    Activity(#[source] StoreError),

    #[error("failed to refresh project aggregate: {0}")]
    Project(#[source] StoreError),
}

/// Effective progress of one activity, read from live subtask state.
pub async fn activity_effective_progress<TStore>(
    store: &TStore,
    activity: &Activity,
) -> Result<i32, StoreError>
where
    TStore: SubtaskStore,
{
    let subtasks = store.list_subtasks_by_activity(activity.id).await?;
    let values: Vec<i32> = subtasks.iter().map(|s| s.progress).collect();
    Ok(effective_activity_progress(activity.progress, &values))
}

/// Effective progress of a project, recomputed from live children rather
/// than the denormalized columns.
pub async fn project_effective_progress<TStore>(
    store: &TStore,
    project_id: Uuid,
) -> Result<i32, StoreError>
where
    TStore: ActivityStore + SubtaskStore,
{
    let activities = store.list_activities_by_project(project_id).await?;
    let mut effectives = Vec::with_capacity(activities.len());
    for activity in &activities {
        effectives.push(activity_effective_progress(store, activity).await?);
    }
    Ok(aggregate_progress(&effectives))
}

pub struct RollupHandler<TStore>
where
    TStore: ActivityStore + ProjectStore + SubtaskStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RollupHandler<TStore>
where
    TStore: ActivityStore + ProjectStore + SubtaskStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Recompute after a subtask create/update/delete: refresh the owning
    /// activity's aggregate from post-mutation sibling state, then the owning
    /// project's. Idempotent for an unchanged store.
    pub async fn after_subtask_change(&self, activity_id: Uuid) -> Result<(), RollupError> {
        let activity = self
            .store
            .get_activity(activity_id)
            .await
            .map_err(RollupError::Activity)?;
        let effective = activity_effective_progress(&*self.store, &activity)
            .await
            .map_err(RollupError::Activity)?;
        self.store
            .set_activity_rollup(activity_id, effective)
            .await
            .map_err(RollupError::Activity)?;
        tracing::debug!(%activity_id, effective, "activity aggregate refreshed");

        self.refresh_project(activity.project_id).await
    }

    /// Recompute after an activity create/update/delete.
    pub async fn after_activity_change(&self, project_id: Uuid) -> Result<(), RollupError> {
        self.refresh_project(project_id).await
    }

    async fn refresh_project(&self, project_id: Uuid) -> Result<(), RollupError> {
        let aggregate = project_effective_progress(&*self.store, project_id)
            .await
            .map_err(RollupError::Project)?;
        self.store
            .set_project_progress(project_id, aggregate)
            .await
            .map_err(RollupError::Project)?;
        tracing::debug!(%project_id, aggregate, "project aggregate refreshed");
        Ok(())
    }
}
