use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, Select, sea_query::Alias,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    project::{
        entities::{CUSTOMER_ALIAS, Project},
        ports::ProjectRepository,
    },
    query::{entities::QueryableEntity, value_objects::QuerySpec},
};
use crate::entity::projects::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
    Relation as ProjectRelation,
};
use crate::infrastructure::query::QuerySpecExt;

#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pub db: DatabaseConnection,
}

impl PostgresProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Projects of one company with the owning customer joined as `customer`.
    fn scoped(company_id: Uuid) -> Select<ProjectEntity> {
        ProjectEntity::find()
            .join_as(
                JoinType::LeftJoin,
                ProjectRelation::Customer.def(),
                Alias::new(CUSTOMER_ALIAS),
            )
            .filter(ProjectColumn::CompanyId.eq(company_id))
    }
}

impl ProjectRepository for PostgresProjectRepository {
    async fn list_by_company(
        &self,
        company_id: Uuid,
        spec: QuerySpec,
    ) -> Result<(Vec<Project>, u64), CoreError> {
        let query = Self::scoped(company_id).apply_query_filter(&spec, &Project::schema());

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count projects: {}", e);
            CoreError::InternalServerError
        })?;

        let projects = query
            .apply_query_page(&spec, &Project::associations())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list projects: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Project::from)
            .collect::<Vec<Project>>();

        Ok((projects, total))
    }

    async fn get_by_id(
        &self,
        company_id: Uuid,
        project_id: Uuid,
    ) -> Result<Option<Project>, CoreError> {
        let project = ProjectEntity::find()
            .filter(ProjectColumn::Id.eq(project_id))
            .filter(ProjectColumn::CompanyId.eq(company_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get project by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Project::from);

        Ok(project)
    }

    async fn create_project(&self, project: Project) -> Result<Project, CoreError> {
        let created_project = ProjectEntity::insert(ProjectActiveModel::from(project))
            .exec_with_returning(&self.db)
            .await
            .map(Project::from)
            .map_err(|e| {
                error!("Failed to create project: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created_project)
    }
}
