use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    customer::{
        entities::{Customer, CustomerConfig},
        ports::{CustomerRepository, CustomerService},
        value_objects::{CreateCustomerInput, GetCustomerInput, ListCustomersInput},
    },
    health::ports::HealthCheckRepository,
    project::ports::ProjectRepository,
    query::value_objects::Paginated,
    report::ports::ReportRepository,
};

impl<CU, PR, RE, HC> CustomerService for Service<CU, PR, RE, HC>
where
    CU: CustomerRepository,
    PR: ProjectRepository,
    RE: ReportRepository,
    HC: HealthCheckRepository,
{
    async fn list_customers(
        &self,
        input: ListCustomersInput,
    ) -> Result<Paginated<Customer>, CoreError> {
        let spec = self
            .query_builder
            .build_for::<Customer>(input.query.as_ref())?;
        debug!(company_id = %input.company_id, ?spec, "listing customers");

        let (customers, total) = self
            .customer_repository
            .list_by_company(input.company_id, spec.clone())
            .await?;

        Ok(Paginated::new(customers, &spec, total))
    }

    async fn get_customer(&self, input: GetCustomerInput) -> Result<Customer, CoreError> {
        self.customer_repository
            .get_by_id(input.company_id, input.customer_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_customer(&self, input: CreateCustomerInput) -> Result<Customer, CoreError> {
        let customer = Customer::new(CustomerConfig {
            company_id: input.company_id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
        });

        self.customer_repository.create_customer(customer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        customer::ports::MockCustomerRepository,
        health::ports::MockHealthCheckRepository,
        project::ports::MockProjectRepository,
        query::{
            services::QueryFilterBuilder,
            value_objects::{
                FilterValue, QueryDefaults, QueryRequest, Scalar, SortDirection, SortKey,
            },
        },
        report::ports::MockReportRepository,
    };
    use uuid::Uuid;

    type TestService = Service<
        MockCustomerRepository,
        MockProjectRepository,
        MockReportRepository,
        MockHealthCheckRepository,
    >;

    fn service(customers: MockCustomerRepository) -> TestService {
        Service::new(
            customers,
            MockProjectRepository::new(),
            MockReportRepository::new(),
            MockHealthCheckRepository::new(),
            QueryFilterBuilder::new(QueryDefaults::default()),
        )
    }

    fn customer(company_id: Uuid, name: &str) -> Customer {
        Customer::new(CustomerConfig {
            company_id,
            name: name.to_string(),
            email: None,
            phone: None,
            address: None,
        })
    }

    #[tokio::test]
    async fn test_list_customers_builds_spec_from_request() {
        let company_id = Uuid::new_v4();
        let stored = customer(company_id, "Acme Abatement");
        let returned = stored.clone();

        let mut repository = MockCustomerRepository::new();
        repository
            .expect_list_by_company()
            .withf(move |id, spec| {
                *id == company_id
                    && spec.page == 2
                    && spec.limit == 5
                    && spec.sort == vec![SortKey::field("name", SortDirection::Desc)]
                    && spec.filter.get("is_active")
                        == Some(&FilterValue::Eq(Scalar::Bool(true)))
            })
            .times(1)
            .returning(move |_, _| {
                let rows = vec![returned.clone()];
                Box::pin(async move { Ok((rows, 6)) })
            });

        let page = service(repository)
            .list_customers(ListCustomersInput {
                company_id,
                query: Some(QueryRequest {
                    page: Some("2".to_string()),
                    limit: Some("5".to_string()),
                    sort: Some("name-DESC".to_string()),
                    filter: Some(r#"{"is_active": "true"}"#.to_string()),
                    search: None,
                }),
            })
            .await
            .unwrap();

        assert_eq!(page.data, vec![stored]);
        assert_eq!((page.page, page.limit, page.total), (2, 5, 6));
    }

    #[tokio::test]
    async fn test_list_customers_rejects_malformed_filter() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_list_by_company().never();

        let result = service(repository)
            .list_customers(ListCustomersInput {
                company_id: Uuid::new_v4(),
                query: Some(QueryRequest {
                    filter: Some("{bad".to_string()),
                    ..QueryRequest::default()
                }),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_get_customer_maps_missing_row_to_not_found() {
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_get_by_id()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let result = service(repository)
            .get_customer(GetCustomerInput {
                company_id: Uuid::new_v4(),
                customer_id: Uuid::new_v4(),
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_create_customer_persists_new_entity() {
        let company_id = Uuid::new_v4();
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_create_customer()
            .withf(move |c| c.company_id == company_id && c.name == "Northside Mould" && c.is_active)
            .returning(|c| Box::pin(async move { Ok(c) }));

        let created = service(repository)
            .create_customer(CreateCustomerInput {
                company_id,
                name: "Northside Mould".to_string(),
                email: Some("office@northside.test".to_string()),
                phone: None,
                address: None,
            })
            .await
            .unwrap();

        assert_eq!(created.company_id, company_id);
        assert_eq!(created.created_at, created.updated_at);
    }
}
