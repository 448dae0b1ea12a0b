use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{query::value_objects::QueryRequest, report::entities::ReportKind};

#[derive(Debug, Clone)]
pub struct ListReportsInput {
    pub company_id: Uuid,
    pub query: Option<QueryRequest>,
}

pub struct GetReportInput {
    pub company_id: Uuid,
    pub report_id: Uuid,
}

pub struct CreateReportInput {
    pub company_id: Uuid,
    pub project_id: Uuid,
    pub kind: ReportKind,
    pub title: String,
    pub inspection_date: NaiveDate,
    pub sample_count: i32,
}
