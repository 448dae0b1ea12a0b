use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    query::entities::{AssociationDescriptor, EntitySchema, FieldType, QueryableEntity},
};

/// Alias under which the inspected project is joined for search and sort.
pub const PROJECT_ALIAS: &str = "project";

/// Hazard a report assesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Asbestos,
    Lead,
    Mould,
    Mercury,
    Pcb,
    Silica,
    Ods,
    Pest,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Asbestos => "asbestos",
            ReportKind::Lead => "lead",
            ReportKind::Mould => "mould",
            ReportKind::Mercury => "mercury",
            ReportKind::Pcb => "pcb",
            ReportKind::Silica => "silica",
            ReportKind::Ods => "ods",
            ReportKind::Pest => "pest",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asbestos" => Ok(ReportKind::Asbestos),
            "lead" => Ok(ReportKind::Lead),
            "mould" => Ok(ReportKind::Mould),
            "mercury" => Ok(ReportKind::Mercury),
            "pcb" => Ok(ReportKind::Pcb),
            "silica" => Ok(ReportKind::Silica),
            "ods" => Ok(ReportKind::Ods),
            "pest" => Ok(ReportKind::Pest),
            other => Err(format!("unknown report kind '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub id: Uuid,
    pub company_id: Uuid,
    pub project_id: Uuid,
    pub kind: ReportKind,
    pub title: String,
    pub status: String, // 'draft' | 'in_review' | 'issued'
    pub inspection_date: NaiveDate,
    pub sample_count: i32,
    pub is_final: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub company_id: Uuid,
    pub project_id: Uuid,
    pub kind: ReportKind,
    pub title: String,
    pub inspection_date: NaiveDate,
    pub sample_count: i32,
}

impl Report {
    pub fn new(config: ReportConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            company_id: config.company_id,
            project_id: config.project_id,
            kind: config.kind,
            title: config.title,
            status: "draft".to_string(),
            inspection_date: config.inspection_date,
            sample_count: config.sample_count,
            is_final: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl QueryableEntity for Report {
    fn schema() -> EntitySchema {
        EntitySchema::new()
            .with_field("id", FieldType::Uuid)
            .with_field("project_id", FieldType::Uuid)
            .with_field("kind", FieldType::String)
            .with_field("title", FieldType::String)
            .with_field("status", FieldType::String)
            .with_field("inspection_date", FieldType::DateOnly)
            .with_field("sample_count", FieldType::Integer)
            .with_field("is_final", FieldType::Boolean)
            .with_field("created_at", FieldType::Date)
            .with_field("updated_at", FieldType::Date)
    }

    fn associations() -> Vec<AssociationDescriptor> {
        vec![AssociationDescriptor::new(PROJECT_ALIAS, ["name", "address"])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_round_trips_through_its_name() {
        for kind in [
            ReportKind::Asbestos,
            ReportKind::Lead,
            ReportKind::Mould,
            ReportKind::Mercury,
            ReportKind::Pcb,
            ReportKind::Silica,
            ReportKind::Ods,
            ReportKind::Pest,
        ] {
            assert_eq!(kind.as_str().parse::<ReportKind>(), Ok(kind));
        }
        assert!("radon".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_report_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ReportKind::Pcb).unwrap(), r#""pcb""#);
    }
}
