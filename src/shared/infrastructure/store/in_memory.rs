// In memory implementation of the entity store ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep one map per table, guarded by an async RwLock.
// - Enforce per-table code uniqueness on insert.
// - Simulate a dead backend via the offline toggle for failure-path tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::tracker::core::entities::{Activity, Person, Project, Subtask};
use crate::shared::infrastructure::store::{
    ActivityStore, PersonStore, ProjectStore, StoreError, SubtaskStore,
};

#[derive(Default)]
pub struct InMemoryEntityStore {
    people: RwLock<HashMap<Uuid, Person>>,
    projects: RwLock<HashMap<Uuid, Project>>,
    activities: RwLock<HashMap<Uuid, Activity>>,
    subtasks: RwLock<HashMap<Uuid, Subtask>>,
    offline: bool,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("Entity store offline".into()));
        }
        Ok(())
    }
}

fn not_found(entity: &'static str, id: Uuid) -> StoreError {
    StoreError::NotFound { entity, id }
}

#[async_trait]
impl PersonStore for InMemoryEntityStore {
    async fn list_people(&self) -> Result<Vec<Person>, StoreError> {
        self.ensure_online()?;
        let mut rows: Vec<Person> = self.people.read().await.values().cloned().collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn get_person(&self, id: Uuid) -> Result<Person, StoreError> {
        self.ensure_online()?;
        self.people
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("person", id))
    }

    async fn insert_person(&self, person: Person) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.people.write().await;
        if guard.values().any(|p| p.code == person.code) {
            return Err(StoreError::DuplicateCode {
                entity: "person",
                code: person.code,
            });
        }
        guard.insert(person.id, person);
        Ok(())
    }

    async fn update_person(&self, person: Person) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.people.write().await;
        if !guard.contains_key(&person.id) {
            return Err(not_found("person", person.id));
        }
        guard.insert(person.id, person);
        Ok(())
    }

    async fn delete_person(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.people
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("person", id))
    }
}

#[async_trait]
impl ProjectStore for InMemoryEntityStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;
        let mut rows: Vec<Project> = self.projects.read().await.values().cloned().collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn get_project(&self, id: Uuid) -> Result<Project, StoreError> {
        self.ensure_online()?;
        self.projects
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("project", id))
    }

    async fn insert_project(&self, project: Project) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.projects.write().await;
        if guard.values().any(|p| p.code == project.code) {
            return Err(StoreError::DuplicateCode {
                entity: "project",
                code: project.code,
            });
        }
        guard.insert(project.id, project);
        Ok(())
    }

    async fn update_project(&self, project: Project) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.projects.write().await;
        if !guard.contains_key(&project.id) {
            return Err(not_found("project", project.id));
        }
        guard.insert(project.id, project);
        Ok(())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.projects
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("project", id))
    }

    async fn set_project_progress(&self, id: Uuid, progress: i32) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.projects.write().await;
        let project = guard.get_mut(&id).ok_or_else(|| not_found("project", id))?;
        project.progress = progress;
        Ok(())
    }
}

#[async_trait]
impl ActivityStore for InMemoryEntityStore {
    async fn list_activities(&self) -> Result<Vec<Activity>, StoreError> {
        self.ensure_online()?;
        let mut rows: Vec<Activity> = self.activities.read().await.values().cloned().collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn list_activities_by_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<Activity>, StoreError> {
        self.ensure_online()?;
        let mut rows: Vec<Activity> = self
            .activities
            .read()
            .await
            .values()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn get_activity(&self, id: Uuid) -> Result<Activity, StoreError> {
        self.ensure_online()?;
        self.activities
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("activity", id))
    }

    async fn insert_activity(&self, activity: Activity) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.activities.write().await;
        if guard.values().any(|a| a.code == activity.code) {
            return Err(StoreError::DuplicateCode {
                entity: "activity",
                code: activity.code,
            });
        }
        guard.insert(activity.id, activity);
        Ok(())
    }

    async fn update_activity(&self, activity: Activity) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.activities.write().await;
        if !guard.contains_key(&activity.id) {
            return Err(not_found("activity", activity.id));
        }
        guard.insert(activity.id, activity);
        Ok(())
    }

    async fn delete_activity(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.activities
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("activity", id))
    }

    async fn set_activity_rollup(&self, id: Uuid, progress: i32) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.activities.write().await;
        let activity = guard
            .get_mut(&id)
            .ok_or_else(|| not_found("activity", id))?;
        activity.rollup_progress = progress;
        Ok(())
    }
}

#[async_trait]
impl SubtaskStore for InMemoryEntityStore {
    async fn list_subtasks(&self) -> Result<Vec<Subtask>, StoreError> {
        self.ensure_online()?;
        let mut rows: Vec<Subtask> = self.subtasks.read().await.values().cloned().collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn list_subtasks_by_activity(
        &self,
        activity_id: Uuid,
    ) -> Result<Vec<Subtask>, StoreError> {
        self.ensure_online()?;
        let mut rows: Vec<Subtask> = self
            .subtasks
            .read()
            .await
            .values()
            .filter(|s| s.activity_id == activity_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn get_subtask(&self, id: Uuid) -> Result<Subtask, StoreError> {
        self.ensure_online()?;
        self.subtasks
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("subtask", id))
    }

    async fn insert_subtask(&self, subtask: Subtask) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.subtasks.write().await;
        if guard.values().any(|s| s.code == subtask.code) {
            return Err(StoreError::DuplicateCode {
                entity: "subtask",
                code: subtask.code,
            });
        }
        guard.insert(subtask.id, subtask);
        Ok(())
    }

    async fn update_subtask(&self, subtask: Subtask) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.subtasks.write().await;
        if !guard.contains_key(&subtask.id) {
            return Err(not_found("subtask", subtask.id));
        }
        guard.insert(subtask.id, subtask);
        Ok(())
    }

    async fn delete_subtask(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.subtasks
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("subtask", id))
    }
}
