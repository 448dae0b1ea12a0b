use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, Select, sea_query::Alias,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{entities::QueryableEntity, value_objects::QuerySpec},
    report::{
        entities::{PROJECT_ALIAS, Report},
        ports::ReportRepository,
    },
};
use crate::entity::reports::{
    ActiveModel as ReportActiveModel, Column as ReportColumn, Entity as ReportEntity,
    Relation as ReportRelation,
};
use crate::infrastructure::query::QuerySpecExt;

#[derive(Debug, Clone)]
pub struct PostgresReportRepository {
    pub db: DatabaseConnection,
}

impl PostgresReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn scoped(company_id: Uuid) -> Select<ReportEntity> {
        ReportEntity::find()
            .join_as(
                JoinType::LeftJoin,
                ReportRelation::Project.def(),
                Alias::new(PROJECT_ALIAS),
            )
            .filter(ReportColumn::CompanyId.eq(company_id))
    }
}

impl ReportRepository for PostgresReportRepository {
    async fn list_by_company(
        &self,
        company_id: Uuid,
        spec: QuerySpec,
    ) -> Result<(Vec<Report>, u64), CoreError> {
        let query = Self::scoped(company_id).apply_query_filter(&spec, &Report::schema());

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count reports: {}", e);
            CoreError::InternalServerError
        })?;

        let reports = query
            .apply_query_page(&spec, &Report::associations())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list reports: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Report::try_from)
            .collect::<Result<Vec<Report>, CoreError>>()?;

        Ok((reports, total))
    }

    async fn get_by_id(
        &self,
        company_id: Uuid,
        report_id: Uuid,
    ) -> Result<Option<Report>, CoreError> {
        ReportEntity::find()
            .filter(ReportColumn::Id.eq(report_id))
            .filter(ReportColumn::CompanyId.eq(company_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get report by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Report::try_from)
            .transpose()
    }

    async fn create_report(&self, report: Report) -> Result<Report, CoreError> {
        let model = ReportEntity::insert(ReportActiveModel::from(report))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create report: {}", e);
                CoreError::InternalServerError
            })?;

        Report::try_from(model)
    }
}
