use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::tracker::core::entities::{Person, PersonPatch};
use crate::modules::tracker::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::store::PersonStore;

#[derive(Debug, Clone, Deserialize)]
pub struct NewPerson {
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub sector: String,
    pub notes: Option<String>,
}

pub struct PeopleHandler<TStore>
where
    TStore: PersonStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PeopleHandler<TStore>
where
    TStore: PersonStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Person>, ApplicationError> {
        Ok(self.store.list_people().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Person, ApplicationError> {
        Ok(self.store.get_person(id).await?)
    }

    pub async fn create(&self, input: NewPerson) -> Result<Person, ApplicationError> {
        let now = Utc::now();
        let person = Person {
            id: Uuid::now_v7(),
            code: input.code,
            name: input.name,
            email: input.email,
            phone: input.phone,
            job_title: input.job_title,
            department: input.department,
            sector: input.sector,
            active: true,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_person(person.clone()).await?;
        Ok(person)
    }

    pub async fn update(&self, id: Uuid, patch: PersonPatch) -> Result<Person, ApplicationError> {
        let mut person = self.store.get_person(id).await?;
        person.apply(patch, Utc::now());
        self.store.update_person(person.clone()).await?;
        Ok(person)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        Ok(self.store.delete_person(id).await?)
    }
}
