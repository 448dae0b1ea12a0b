use tracing::{debug, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    customer::ports::CustomerRepository,
    health::ports::HealthCheckRepository,
    project::{
        entities::{Project, ProjectConfig},
        ports::{ProjectRepository, ProjectService},
        value_objects::{CreateProjectInput, GetProjectInput, ListProjectsInput},
    },
    query::value_objects::Paginated,
    report::ports::ReportRepository,
};

impl<CU, PR, RE, HC> ProjectService for Service<CU, PR, RE, HC>
where
    CU: CustomerRepository,
    PR: ProjectRepository,
    RE: ReportRepository,
    HC: HealthCheckRepository,
{
    async fn list_projects(
        &self,
        input: ListProjectsInput,
    ) -> Result<Paginated<Project>, CoreError> {
        let spec = self
            .query_builder
            .build_for::<Project>(input.query.as_ref())?;
        debug!(company_id = %input.company_id, ?spec, "listing projects");

        let (projects, total) = self
            .project_repository
            .list_by_company(input.company_id, spec.clone())
            .await?;

        Ok(Paginated::new(projects, &spec, total))
    }

    async fn get_project(&self, input: GetProjectInput) -> Result<Project, CoreError> {
        self.project_repository
            .get_by_id(input.company_id, input.project_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_project(&self, input: CreateProjectInput) -> Result<Project, CoreError> {
        if self
            .customer_repository
            .get_by_id(input.company_id, input.customer_id)
            .await?
            .is_none()
        {
            warn!(
                company_id = %input.company_id,
                customer_id = %input.customer_id,
                "project references unknown customer"
            );
            return Err(CoreError::NotFound);
        }

        let project = Project::new(ProjectConfig {
            company_id: input.company_id,
            customer_id: input.customer_id,
            name: input.name,
            project_number: input.project_number,
            address: input.address,
            budget: input.budget,
            start_date: input.start_date,
        });

        self.project_repository.create_project(project).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        customer::{
            entities::{Customer, CustomerConfig},
            ports::MockCustomerRepository,
        },
        health::ports::MockHealthCheckRepository,
        project::ports::MockProjectRepository,
        query::{
            services::QueryFilterBuilder,
            value_objects::{FieldPath, QueryDefaults, QueryRequest},
        },
        report::ports::MockReportRepository,
    };
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn service(
        customers: MockCustomerRepository,
        projects: MockProjectRepository,
    ) -> Service<
        MockCustomerRepository,
        MockProjectRepository,
        MockReportRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            customers,
            projects,
            MockReportRepository::new(),
            MockHealthCheckRepository::new(),
            QueryFilterBuilder::new(QueryDefaults::default()),
        )
    }

    fn input(company_id: Uuid, customer_id: Uuid) -> CreateProjectInput {
        CreateProjectInput {
            company_id,
            customer_id,
            name: "Riverside School".to_string(),
            project_number: 1042,
            address: Some("12 River Rd".to_string()),
            budget: 18_500.0,
            start_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_list_projects_searches_customer_association() {
        let mut projects = MockProjectRepository::new();
        projects
            .expect_list_by_company()
            .withf(|_, spec| {
                spec.search.clauses().iter().any(|clause| {
                    clause.path
                        == FieldPath::Associated {
                            alias: "customer".to_string(),
                            field: "email".to_string(),
                        }
                })
            })
            .returning(|_, _| Box::pin(async { Ok((Vec::new(), 0)) }));

        let page = service(MockCustomerRepository::new(), projects)
            .list_projects(ListProjectsInput {
                company_id: Uuid::new_v4(),
                query: Some(QueryRequest {
                    search: Some("acme".to_string()),
                    ..QueryRequest::default()
                }),
            })
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_create_project_requires_customer_in_company() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_get_by_id()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        let mut projects = MockProjectRepository::new();
        projects.expect_create_project().never();

        let result = service(customers, projects)
            .create_project(input(Uuid::new_v4(), Uuid::new_v4()))
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_create_project_opens_new_project() {
        let company_id = Uuid::new_v4();
        let customer = Customer::new(CustomerConfig {
            company_id,
            name: "Acme".to_string(),
            email: None,
            phone: None,
            address: None,
        });
        let customer_id = customer.id;

        let mut customers = MockCustomerRepository::new();
        customers.expect_get_by_id().returning(move |_, _| {
            let found = customer.clone();
            Box::pin(async move { Ok(Some(found)) })
        });
        let mut projects = MockProjectRepository::new();
        projects
            .expect_create_project()
            .returning(|p| Box::pin(async move { Ok(p) }));

        let project = service(customers, projects)
            .create_project(input(company_id, customer_id))
            .await
            .unwrap();

        assert_eq!(project.customer_id, customer_id);
        assert_eq!(project.status, "open");
        assert_eq!(project.project_number, 1042);
    }
}
