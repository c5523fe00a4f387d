use async_graphql::{Context, EmptySubscription, ID, Object, Result as GqlResult, Schema};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::tracker::core::entities::{ActivityPatch, ProjectPatch, SubtaskPatch};
use crate::modules::tracker::core::stats::ProjectStats;
use crate::modules::tracker::use_cases::activities::handler::ActivityView;
use crate::modules::tracker::use_cases::people::handler::NewPerson;
use crate::modules::tracker::use_cases::projects::handler::{NewProject, ProjectView};
use crate::modules::tracker::use_cases::subtasks::handler::SubtaskView;
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

fn parse_id(id: &ID) -> GqlResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| async_graphql::Error::new(format!("malformed id {id:?}")))
}

fn map_err(e: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlPerson {
    pub id: ID,
    pub code: String,
    pub name: String,
    pub sector: String,
    pub active: bool,
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlProject {
    pub id: ID,
    pub code: String,
    pub name: String,
    pub approved: bool,
    pub progress: i32,
    pub status: String,
}

impl From<ProjectView> for GqlProject {
    fn from(v: ProjectView) -> Self {
        Self {
            id: ID(v.project.id.to_string()),
            code: v.project.code,
            name: v.project.name,
            approved: v.project.approved,
            progress: v.project.progress,
            status: v.status.to_string(),
        }
    }
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlActivity {
    pub id: ID,
    pub code: String,
    pub project_id: ID,
    pub task: String,
    pub effective_progress: i32,
    pub status: String,
    pub due_date: Option<String>,
    pub deadline: String,
    pub hours_variance: i32,
}

impl From<ActivityView> for GqlActivity {
    fn from(v: ActivityView) -> Self {
        Self {
            id: ID(v.activity.id.to_string()),
            code: v.activity.code,
            project_id: ID(v.activity.project_id.to_string()),
            task: v.activity.task,
            effective_progress: v.effective_progress,
            status: v.status.to_string(),
            due_date: v.due_date.map(|d| d.to_string()),
            deadline: v.deadline.to_string(),
            hours_variance: v.hours_variance,
        }
    }
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlSubtask {
    pub id: ID,
    pub code: String,
    pub activity_id: ID,
    pub name: String,
    pub progress: i32,
    pub status: String,
    pub deadline: String,
    pub hours_variance: i32,
}

impl From<SubtaskView> for GqlSubtask {
    fn from(v: SubtaskView) -> Self {
        Self {
            id: ID(v.subtask.id.to_string()),
            code: v.subtask.code,
            activity_id: ID(v.subtask.activity_id.to_string()),
            name: v.subtask.name,
            progress: v.subtask.progress,
            status: v.status.to_string(),
            deadline: v.deadline.to_string(),
            hours_variance: v.hours_variance,
        }
    }
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlProjectStats {
    pub total_activities: i32,
    pub not_started: i32,
    pub in_progress: i32,
    pub completed: i32,
    pub cancelled: i32,
    pub planned_hours: i64,
    pub actual_start: Option<String>,
    pub projected_finish: Option<String>,
    pub overall_progress: i32,
    pub on_time: i32,
    pub late: i32,
}

impl From<ProjectStats> for GqlProjectStats {
    fn from(s: ProjectStats) -> Self {
        Self {
            total_activities: s.total_activities as i32,
            not_started: s.not_started as i32,
            in_progress: s.in_progress as i32,
            completed: s.completed as i32,
            cancelled: s.cancelled as i32,
            planned_hours: s.planned_hours,
            actual_start: s.actual_start.map(|d| d.to_string()),
            projected_finish: s.projected_finish.map(|d| d.to_string()),
            overall_progress: s.overall_progress,
            on_time: s.on_time as i32,
            late: s.late as i32,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn people(&self, context: &Context<'_>) -> GqlResult<Vec<GqlPerson>> {
        let state = context.data_unchecked::<AppState>();
        let people = state.people.list().await.map_err(map_err)?;
        Ok(people
            .into_iter()
            .map(|p| GqlPerson {
                id: ID(p.id.to_string()),
                code: p.code,
                name: p.name,
                sector: p.sector,
                active: p.active,
            })
            .collect())
    }

    async fn projects(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let views = state.projects.list().await.map_err(map_err)?;
        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn activities_by_project(
        &self,
        context: &Context<'_>,
        project_id: ID,
    ) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let today = Utc::now().date_naive();
        let views = state
            .activities
            .list_by_project(parse_id(&project_id)?, today)
            .await
            .map_err(map_err)?;
        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn subtasks_by_activity(
        &self,
        context: &Context<'_>,
        activity_id: ID,
    ) -> GqlResult<Vec<GqlSubtask>> {
        let state = context.data_unchecked::<AppState>();
        let today = Utc::now().date_naive();
        let views = state
            .subtasks
            .list_by_activity(parse_id(&activity_id)?, today)
            .await
            .map_err(map_err)?;
        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn project_stats(
        &self,
        context: &Context<'_>,
        project_id: ID,
    ) -> GqlResult<GqlProjectStats> {
        let state = context.data_unchecked::<AppState>();
        let today = Utc::now().date_naive();
        let stats = state
            .projects
            .stats(parse_id(&project_id)?, today)
            .await
            .map_err(map_err)?;
        Ok(stats.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_person(&self, context: &Context<'_>, input: NewPersonInput) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let person = state
            .people
            .create(NewPerson {
                code: input.code,
                name: input.name,
                email: input.email,
                phone: None,
                job_title: None,
                department: None,
                sector: input.sector,
                notes: None,
            })
            .await
            .map_err(map_err)?;
        Ok(ID(person.id.to_string()))
    }

    async fn create_project(&self, context: &Context<'_>, code: String, name: String) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let project = state
            .projects
            .create(NewProject {
                code,
                name,
                description: None,
                priority: Default::default(),
                owner_ids: vec![],
                planned_start: None,
                planned_end: None,
                approved: false,
                notes: None,
            })
            .await
            .map_err(map_err)?;
        Ok(ID(project.id.to_string()))
    }

    async fn approve_project(
        &self,
        context: &Context<'_>,
        project_id: ID,
        approved: bool,
    ) -> GqlResult<GqlProject> {
        let state = context.data_unchecked::<AppState>();
        let id = parse_id(&project_id)?;
        state
            .projects
            .update(
                id,
                crate::modules::tracker::core::entities::ProjectPatch {
                    approved: Some(approved),
                    ..Default::default()
                },
            )
            .await
            .map_err(map_err)?;
        let view = state.projects.get(id).await.map_err(map_err)?;
        Ok(view.into())
    }

    async fn set_activity_progress(
        &self,
        context: &Context<'_>,
        activity_id: ID,
        progress: i32,
    ) -> GqlResult<i32> {
        let state = context.data_unchecked::<AppState>();
        let updated = state
            .activities
            .update(
                parse_id(&activity_id)?,
                ActivityPatch {
                    progress: Some(progress),
                    ..Default::default()
                },
            )
            .await
            .map_err(map_err)?;
        Ok(updated.rollup_progress)
    }

    async fn set_subtask_progress(
        &self,
        context: &Context<'_>,
        subtask_id: ID,
        progress: i32,
    ) -> GqlResult<i32> {
        let state = context.data_unchecked::<AppState>();
        let updated = state
            .subtasks
            .update(
                parse_id(&subtask_id)?,
                SubtaskPatch {
                    progress: Some(progress),
                    ..Default::default()
                },
            )
            .await
            .map_err(map_err)?;
        Ok(updated.progress)
    }
}

#[derive(async_graphql::InputObject)]
pub struct NewPersonInput {
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub sector: String,
}
