use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    query::entities::{EntitySchema, FieldType, QueryableEntity},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CustomerConfig {
    pub company_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    pub fn new(config: CustomerConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            company_id: config.company_id,
            name: config.name,
            email: config.email,
            phone: config.phone,
            address: config.address,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl QueryableEntity for Customer {
    fn schema() -> EntitySchema {
        EntitySchema::new()
            .with_field("id", FieldType::Uuid)
            .with_field("name", FieldType::String)
            .with_field("email", FieldType::String)
            .with_field("phone", FieldType::String)
            .with_field("address", FieldType::String)
            .with_field("is_active", FieldType::Boolean)
            .with_field("created_at", FieldType::Date)
            .with_field("updated_at", FieldType::Date)
    }
}
