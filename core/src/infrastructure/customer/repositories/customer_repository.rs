use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    customer::{entities::Customer, ports::CustomerRepository},
    query::{entities::QueryableEntity, value_objects::QuerySpec},
};
use crate::entity::customers::{
    ActiveModel as CustomerActiveModel, Column as CustomerColumn, Entity as CustomerEntity,
};
use crate::infrastructure::query::QuerySpecExt;

#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pub db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CustomerRepository for PostgresCustomerRepository {
    async fn list_by_company(
        &self,
        company_id: Uuid,
        spec: QuerySpec,
    ) -> Result<(Vec<Customer>, u64), CoreError> {
        let query = CustomerEntity::find()
            .filter(CustomerColumn::CompanyId.eq(company_id))
            .apply_query_filter(&spec, &Customer::schema());

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count customers: {}", e);
            CoreError::InternalServerError
        })?;

        let customers = query
            .apply_query_page(&spec, &Customer::associations())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list customers: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Customer::from)
            .collect::<Vec<Customer>>();

        Ok((customers, total))
    }

    async fn get_by_id(
        &self,
        company_id: Uuid,
        customer_id: Uuid,
    ) -> Result<Option<Customer>, CoreError> {
        let customer = CustomerEntity::find()
            .filter(CustomerColumn::Id.eq(customer_id))
            .filter(CustomerColumn::CompanyId.eq(company_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get customer by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Customer::from);

        Ok(customer)
    }

    async fn create_customer(&self, customer: Customer) -> Result<Customer, CoreError> {
        let created_customer = CustomerEntity::insert(CustomerActiveModel::from(customer))
            .exec_with_returning(&self.db)
            .await
            .map(Customer::from)
            .map_err(|e| {
                error!("Failed to create customer: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created_customer)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::*;
    use crate::domain::query::{
        services::QueryFilterBuilder,
        value_objects::{QueryDefaults, QueryRequest},
    };
    use crate::entity::customers::Model as CustomerModel;

    fn model(company_id: Uuid, name: &str) -> CustomerModel {
        let now = Utc::now().fixed_offset();
        CustomerModel {
            id: Uuid::new_v4(),
            company_id,
            name: name.to_string(),
            email: Some("ops@example.test".to_string()),
            phone: None,
            address: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(total)))])
    }

    #[tokio::test]
    async fn test_list_by_company_returns_page_and_total() {
        let company_id = Uuid::new_v4();
        let rows = vec![model(company_id, "Acme"), model(company_id, "Acme North")];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(12)]])
            .append_query_results([rows.clone()])
            .into_connection();
        let repository = PostgresCustomerRepository::new(db);

        let spec = QueryFilterBuilder::new(QueryDefaults::default())
            .build_for::<Customer>(Some(&QueryRequest {
                limit: Some("2".to_string()),
                search: Some("Acme".to_string()),
                ..QueryRequest::default()
            }))
            .unwrap();

        let (customers, total) = repository.list_by_company(company_id, spec).await.unwrap();

        assert_eq!(total, 12);
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Acme");
        assert_eq!(customers[1].company_id, company_id);
        assert_eq!(repository.db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_is_scoped_to_company() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<CustomerModel>::new()])
            .into_connection();
        let repository = PostgresCustomerRepository::new(db);

        let found = repository
            .get_by_id(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_create_customer_returns_stored_row() {
        let company_id = Uuid::new_v4();
        let stored = model(company_id, "Northside Mould");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored.clone()]])
            .into_connection();
        let repository = PostgresCustomerRepository::new(db);

        let created = repository
            .create_customer(Customer::from(stored.clone()))
            .await
            .unwrap();

        assert_eq!(created.id, stored.id);
        assert_eq!(created.name, "Northside Mould");
    }

    #[tokio::test]
    async fn test_database_errors_surface_as_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repository = PostgresCustomerRepository::new(db);

        let result = repository.get_by_id(Uuid::new_v4(), Uuid::new_v4()).await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }
}
