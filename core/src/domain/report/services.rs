use tracing::{debug, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    customer::ports::CustomerRepository,
    health::ports::HealthCheckRepository,
    project::ports::ProjectRepository,
    query::value_objects::Paginated,
    report::{
        entities::{Report, ReportConfig},
        ports::{ReportRepository, ReportService},
        value_objects::{CreateReportInput, GetReportInput, ListReportsInput},
    },
};

impl<CU, PR, RE, HC> ReportService for Service<CU, PR, RE, HC>
where
    CU: CustomerRepository,
    PR: ProjectRepository,
    RE: ReportRepository,
    HC: HealthCheckRepository,
{
    async fn list_reports(&self, input: ListReportsInput) -> Result<Paginated<Report>, CoreError> {
        let spec = self
            .query_builder
            .build_for::<Report>(input.query.as_ref())?;
        debug!(company_id = %input.company_id, ?spec, "listing reports");

        let (reports, total) = self
            .report_repository
            .list_by_company(input.company_id, spec.clone())
            .await?;

        Ok(Paginated::new(reports, &spec, total))
    }

    async fn get_report(&self, input: GetReportInput) -> Result<Report, CoreError> {
        self.report_repository
            .get_by_id(input.company_id, input.report_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_report(&self, input: CreateReportInput) -> Result<Report, CoreError> {
        if input.sample_count < 0 {
            return Err(CoreError::Invalid(
                "sample_count must not be negative".to_string(),
            ));
        }

        if self
            .project_repository
            .get_by_id(input.company_id, input.project_id)
            .await?
            .is_none()
        {
            warn!(
                company_id = %input.company_id,
                project_id = %input.project_id,
                "report references unknown project"
            );
            return Err(CoreError::NotFound);
        }

        let report = Report::new(ReportConfig {
            company_id: input.company_id,
            project_id: input.project_id,
            kind: input.kind,
            title: input.title,
            inspection_date: input.inspection_date,
            sample_count: input.sample_count,
        });

        self.report_repository.create_report(report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        customer::ports::MockCustomerRepository,
        health::ports::MockHealthCheckRepository,
        project::{
            entities::{Project, ProjectConfig},
            ports::MockProjectRepository,
        },
        query::{
            services::QueryFilterBuilder,
            value_objects::{QueryDefaults, QueryRequest, SortDirection, SortKey},
        },
        report::{entities::ReportKind, ports::MockReportRepository},
    };
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn service(
        projects: MockProjectRepository,
        reports: MockReportRepository,
    ) -> Service<
        MockCustomerRepository,
        MockProjectRepository,
        MockReportRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            MockCustomerRepository::new(),
            projects,
            reports,
            MockHealthCheckRepository::new(),
            QueryFilterBuilder::new(QueryDefaults::default()),
        )
    }

    fn input(company_id: Uuid, project_id: Uuid, sample_count: i32) -> CreateReportInput {
        CreateReportInput {
            company_id,
            project_id,
            kind: ReportKind::Asbestos,
            title: "Pre-demolition survey".to_string(),
            inspection_date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            sample_count,
        }
    }

    #[tokio::test]
    async fn test_list_reports_resolves_joined_sort() {
        let mut reports = MockReportRepository::new();
        reports
            .expect_list_by_company()
            .withf(|_, spec| {
                spec.sort
                    == vec![
                        SortKey::Joined {
                            association: "project".to_string(),
                            column: "name".to_string(),
                            direction: SortDirection::Desc,
                        },
                        SortKey::field("inspection_date", SortDirection::Asc),
                    ]
            })
            .returning(|_, _| Box::pin(async { Ok((Vec::new(), 0)) }));

        let page = service(MockProjectRepository::new(), reports)
            .list_reports(ListReportsInput {
                company_id: Uuid::new_v4(),
                query: Some(QueryRequest {
                    sort: Some("project.name-DESC,inspection_date".to_string()),
                    ..QueryRequest::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!((page.page, page.limit), (1, 10));
    }

    #[tokio::test]
    async fn test_create_report_rejects_negative_sample_count() {
        let mut projects = MockProjectRepository::new();
        projects.expect_get_by_id().never();

        let result = service(projects, MockReportRepository::new())
            .create_report(input(Uuid::new_v4(), Uuid::new_v4(), -1))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_create_report_starts_as_draft() {
        let company_id = Uuid::new_v4();
        let project = Project::new(ProjectConfig {
            company_id,
            customer_id: Uuid::new_v4(),
            name: "Old Mill".to_string(),
            project_number: 7,
            address: None,
            budget: 0.0,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        });
        let project_id = project.id;

        let mut projects = MockProjectRepository::new();
        projects.expect_get_by_id().returning(move |_, _| {
            let found = project.clone();
            Box::pin(async move { Ok(Some(found)) })
        });
        let mut reports = MockReportRepository::new();
        reports
            .expect_create_report()
            .returning(|r| Box::pin(async move { Ok(r) }));

        let report = service(projects, reports)
            .create_report(input(company_id, project_id, 12))
            .await
            .unwrap();

        assert_eq!(report.status, "draft");
        assert!(!report.is_final);
        assert_eq!(report.kind, ReportKind::Asbestos);
    }
}
