use uuid::Uuid;

use crate::domain::query::value_objects::QueryRequest;

#[derive(Debug, Clone)]
pub struct ListCustomersInput {
    pub company_id: Uuid,
    pub query: Option<QueryRequest>,
}

pub struct GetCustomerInput {
    pub company_id: Uuid,
    pub customer_id: Uuid,
}

pub struct CreateCustomerInput {
    pub company_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
