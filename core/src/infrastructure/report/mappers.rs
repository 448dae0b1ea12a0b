use chrono::Utc;
use sea_orm::ActiveValue::Set;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::entities::{Report, ReportKind},
};
use crate::entity::reports::{ActiveModel as ReportActiveModel, Model as ReportModel};

impl TryFrom<ReportModel> for Report {
    type Error = CoreError;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let kind = model.kind.parse::<ReportKind>().map_err(|e| {
            error!(report_id = %model.id, "Stored report has an invalid kind: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Report {
            id: model.id,
            company_id: model.company_id,
            project_id: model.project_id,
            kind,
            title: model.title,
            status: model.status,
            inspection_date: model.inspection_date,
            sample_count: model.sample_count,
            is_final: model.is_final,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}

impl From<Report> for ReportActiveModel {
    fn from(report: Report) -> Self {
        ReportActiveModel {
            id: Set(report.id),
            company_id: Set(report.company_id),
            project_id: Set(report.project_id),
            kind: Set(report.kind.to_string()),
            title: Set(report.title),
            status: Set(report.status),
            inspection_date: Set(report.inspection_date),
            sample_count: Set(report.sample_count),
            is_final: Set(report.is_final),
            created_at: Set(report.created_at.fixed_offset()),
            updated_at: Set(report.updated_at.fixed_offset()),
        }
    }
}
