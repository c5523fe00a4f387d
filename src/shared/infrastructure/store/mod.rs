// Ports define what the use cases need from persistence, without implementing it.
//
// Purpose
// - Describe the entity store as traits, one per aggregate table.
//
// Responsibilities
// - Keep handlers independent of any database by coding against traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::tracker::core::entities::{Activity, Person, Project, Subtask};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} code {code:?} already exists")]
    DuplicateCode { entity: &'static str, code: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn list_people(&self) -> Result<Vec<Person>, StoreError>;
    async fn get_person(&self, id: Uuid) -> Result<Person, StoreError>;
    async fn insert_person(&self, person: Person) -> Result<(), StoreError>;
    async fn update_person(&self, person: Person) -> Result<(), StoreError>;
    async fn delete_person(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn get_project(&self, id: Uuid) -> Result<Project, StoreError>;
    async fn insert_project(&self, project: Project) -> Result<(), StoreError>;
    async fn update_project(&self, project: Project) -> Result<(), StoreError>;
    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError>;
    /// Rollup write path: refresh the denormalized aggregate column only.
    async fn set_project_progress(&self, id: Uuid, progress: i32) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn list_activities(&self) -> Result<Vec<Activity>, StoreError>;
    async fn list_activities_by_project(&self, project_id: Uuid)
    -> Result<Vec<Activity>, StoreError>;
    async fn get_activity(&self, id: Uuid) -> Result<Activity, StoreError>;
    async fn insert_activity(&self, activity: Activity) -> Result<(), StoreError>;
    async fn update_activity(&self, activity: Activity) -> Result<(), StoreError>;
    async fn delete_activity(&self, id: Uuid) -> Result<(), StoreError>;
    /// Rollup write path: refresh the denormalized effective progress only.
    async fn set_activity_rollup(&self, id: Uuid, progress: i32) -> Result<(), StoreError>;
}

#[async_trait]
pub trait SubtaskStore: Send + Sync {
    async fn list_subtasks(&self) -> Result<Vec<Subtask>, StoreError>;
    async fn list_subtasks_by_activity(&self, activity_id: Uuid)
    -> Result<Vec<Subtask>, StoreError>;
    async fn get_subtask(&self, id: Uuid) -> Result<Subtask, StoreError>;
    async fn insert_subtask(&self, subtask: Subtask) -> Result<(), StoreError>;
    async fn update_subtask(&self, subtask: Subtask) -> Result<(), StoreError>;
    async fn delete_subtask(&self, id: Uuid) -> Result<(), StoreError>;
}
