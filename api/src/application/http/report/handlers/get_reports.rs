use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::{
    query::value_objects::{Paginated, QueryRequest},
    report::{entities::Report, ports::ReportService, value_objects::ListReportsInput},
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    query_extractor::ListQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReportsResponse {
    pub data: Vec<Report>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl From<Paginated<Report>> for GetReportsResponse {
    fn from(page: Paginated<Report>) -> Self {
        Self {
            data: page.data,
            page: page.page,
            limit: page.limit,
            total: page.total,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "report",
    summary = "List reports",
    description = "Lists the reports of a company. Search also matches the inspected project's name and address; `project.name` is a valid sort key.",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
        QueryRequest
    ),
    responses(
        (status = 200, body = GetReportsResponse),
        (status = 400, description = "Malformed filter")
    ),
)]
pub async fn get_reports(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    ListQuery(query): ListQuery,
) -> Result<Response<GetReportsResponse>, ApiError> {
    let reports = state
        .service
        .list_reports(ListReportsInput { company_id, query })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetReportsResponse::from(reports)))
}
