use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    query::entities::{AssociationDescriptor, EntitySchema, FieldType, QueryableEntity},
};

/// Alias under which the owning customer is joined for search and sort.
pub const CUSTOMER_ALIAS: &str = "customer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub company_id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub project_number: i32,
    pub address: Option<String>,
    pub status: String, // 'open' | 'on_hold' | 'closed'
    pub budget: f64,
    pub start_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub company_id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub project_number: i32,
    pub address: Option<String>,
    pub budget: f64,
    pub start_date: NaiveDate,
}

impl Project {
    pub fn new(config: ProjectConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            company_id: config.company_id,
            customer_id: config.customer_id,
            name: config.name,
            project_number: config.project_number,
            address: config.address,
            status: "open".to_string(),
            budget: config.budget,
            start_date: config.start_date,
            created_at: now,
            updated_at: now,
        }
    }
}

impl QueryableEntity for Project {
    fn schema() -> EntitySchema {
        EntitySchema::new()
            .with_field("id", FieldType::Uuid)
            .with_field("customer_id", FieldType::Uuid)
            .with_field("name", FieldType::String)
            .with_field("project_number", FieldType::Integer)
            .with_field("address", FieldType::String)
            .with_field("status", FieldType::String)
            .with_field("budget", FieldType::Float)
            .with_field("start_date", FieldType::DateOnly)
            .with_field("created_at", FieldType::Date)
            .with_field("updated_at", FieldType::Date)
    }

    fn associations() -> Vec<AssociationDescriptor> {
        vec![AssociationDescriptor::new(CUSTOMER_ALIAS, ["name", "email"])]
    }
}
