use std::sync::Arc;

use crate::modules::tracker::use_cases::activities::handler::ActivitiesHandler;
use crate::modules::tracker::use_cases::people::handler::PeopleHandler;
use crate::modules::tracker::use_cases::projects::handler::ProjectsHandler;
use crate::modules::tracker::use_cases::subtasks::handler::SubtasksHandler;
use crate::shared::infrastructure::store::in_memory::InMemoryEntityStore;

#[derive(Clone)]
pub struct AppState {
    pub people: Arc<PeopleHandler<InMemoryEntityStore>>,
    pub projects: Arc<ProjectsHandler<InMemoryEntityStore>>,
    pub activities: Arc<ActivitiesHandler<InMemoryEntityStore>>,
    pub subtasks: Arc<SubtasksHandler<InMemoryEntityStore>>,
}

impl AppState {
    /// Wires every handler onto one shared in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryEntityStore::new()))
    }

    pub fn with_store(store: Arc<InMemoryEntityStore>) -> Self {
        Self {
            people: Arc::new(PeopleHandler::new(store.clone())),
            projects: Arc::new(ProjectsHandler::new(store.clone())),
            activities: Arc::new(ActivitiesHandler::new(store.clone())),
            subtasks: Arc::new(SubtasksHandler::new(store)),
        }
    }
}
