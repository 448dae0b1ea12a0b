use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use siteguard_core::domain::report::entities::ReportKind;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportValidator {
    pub project_id: Uuid,

    pub kind: ReportKind,

    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,

    pub inspection_date: NaiveDate,

    #[serde(default)]
    pub sample_count: i32,
}
