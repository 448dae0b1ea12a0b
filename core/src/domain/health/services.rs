use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    customer::ports::CustomerRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    project::ports::ProjectRepository,
    report::ports::ReportRepository,
};

impl<CU, PR, RE, HC> HealthCheckService for Service<CU, PR, RE, HC>
where
    CU: CustomerRepository,
    PR: ProjectRepository,
    RE: ReportRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
