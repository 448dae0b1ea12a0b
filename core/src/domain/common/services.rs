use crate::domain::{
    customer::ports::CustomerRepository, health::ports::HealthCheckRepository,
    project::ports::ProjectRepository, query::services::QueryFilterBuilder,
    report::ports::ReportRepository,
};

#[derive(Clone)]
pub struct Service<CU, PR, RE, HC>
where
    CU: CustomerRepository,
    PR: ProjectRepository,
    RE: ReportRepository,
    HC: HealthCheckRepository,
{
    pub(crate) customer_repository: CU,
    pub(crate) project_repository: PR,
    pub(crate) report_repository: RE,
    pub(crate) health_check_repository: HC,
    pub(crate) query_builder: QueryFilterBuilder,
}

impl<CU, PR, RE, HC> Service<CU, PR, RE, HC>
where
    CU: CustomerRepository,
    PR: ProjectRepository,
    RE: ReportRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        customer_repository: CU,
        project_repository: PR,
        report_repository: RE,
        health_check_repository: HC,
        query_builder: QueryFilterBuilder,
    ) -> Self {
        Self {
            customer_repository,
            project_repository,
            report_repository,
            health_check_repository,
            query_builder,
        }
    }
}
