use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProjectValidator {
    pub customer_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "project_number must be positive"))]
    pub project_number: i32,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "budget must not be negative"))]
    pub budget: f64,

    pub start_date: NaiveDate,
}
