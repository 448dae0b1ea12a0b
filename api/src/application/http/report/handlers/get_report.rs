use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::report::{
    entities::Report, ports::ReportService, value_objects::GetReportInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReportResponse {
    pub data: Report,
}

#[utoipa::path(
    get,
    path = "/{report_id}",
    tag = "report",
    summary = "Get report",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
        ("report_id" = Uuid, Path, description = "Report id"),
    ),
    responses(
        (status = 200, body = GetReportResponse),
        (status = 404, description = "Report not found")
    ),
)]
pub async fn get_report(
    Path((company_id, report_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<GetReportResponse>, ApiError> {
    let report = state
        .service
        .get_report(GetReportInput {
            company_id,
            report_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReportResponse { data: report }))
}
