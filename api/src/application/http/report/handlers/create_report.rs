use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::report::{
    entities::Report, ports::ReportService, value_objects::CreateReportInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    report::validators::CreateReportValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateReportResponse {
    pub data: Report,
}

#[utoipa::path(
    post,
    path = "",
    tag = "report",
    summary = "Create report",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
    ),
    request_body = CreateReportValidator,
    responses(
        (status = 201, body = CreateReportResponse),
        (status = 404, description = "Project not found in this company")
    ),
)]
pub async fn create_report(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateReportValidator>,
) -> Result<Response<CreateReportResponse>, ApiError> {
    let report = state
        .service
        .create_report(CreateReportInput {
            company_id,
            project_id: payload.project_id,
            kind: payload.kind,
            title: payload.title,
            inspection_date: payload.inspection_date,
            sample_count: payload.sample_count,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateReportResponse { data: report }))
}
