use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::query::value_objects::QueryRequest;

#[derive(Debug, Clone)]
pub struct ListProjectsInput {
    pub company_id: Uuid,
    pub query: Option<QueryRequest>,
}

pub struct GetProjectInput {
    pub company_id: Uuid,
    pub project_id: Uuid,
}

pub struct CreateProjectInput {
    pub company_id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub project_number: i32,
    pub address: Option<String>,
    pub budget: f64,
    pub start_date: NaiveDate,
}
