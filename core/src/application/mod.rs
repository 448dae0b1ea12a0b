use tracing::info;

use crate::{
    domain::{
        common::{SiteGuardConfig, entities::app_errors::CoreError, services::Service},
        query::services::QueryFilterBuilder,
    },
    infrastructure::{
        customer::repositories::customer_repository::PostgresCustomerRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::repository::PostgresHealthCheckRepository,
        project::repositories::project_repository::PostgresProjectRepository,
        report::repositories::report_repository::PostgresReportRepository,
    },
};

pub type SiteGuardService = Service<
    PostgresCustomerRepository,
    PostgresProjectRepository,
    PostgresReportRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: SiteGuardConfig) -> Result<SiteGuardService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    info!(host = %config.database.host, name = %config.database.name, "connected to database");

    let db = postgres.get_db();

    Ok(Service::new(
        PostgresCustomerRepository::new(db.clone()),
        PostgresProjectRepository::new(db.clone()),
        PostgresReportRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        QueryFilterBuilder::new(config.query),
    ))
}
