use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    customer::{
        entities::Customer,
        value_objects::{CreateCustomerInput, GetCustomerInput, ListCustomersInput},
    },
    query::value_objects::{Paginated, QuerySpec},
};

pub trait CustomerService: Send + Sync {
    fn list_customers(
        &self,
        input: ListCustomersInput,
    ) -> impl Future<Output = Result<Paginated<Customer>, CoreError>> + Send;

    fn get_customer(
        &self,
        input: GetCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CustomerRepository: Send + Sync {
    /// Returns the requested page together with the size of the whole
    /// filtered set.
    fn list_by_company(
        &self,
        company_id: Uuid,
        spec: QuerySpec,
    ) -> impl Future<Output = Result<(Vec<Customer>, u64), CoreError>> + Send;

    fn get_by_id(
        &self,
        company_id: Uuid,
        customer_id: Uuid,
    ) -> impl Future<Output = Result<Option<Customer>, CoreError>> + Send;

    fn create_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;
}
