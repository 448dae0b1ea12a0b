use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::{
    query::value_objects::{Paginated, QueryRequest},
    project::{entities::Project, ports::ProjectService, value_objects::ListProjectsInput},
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
pub struct GetProjectsResponse {
    pub data: Vec<Project>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl From<Paginated<Project>> for GetProjectsResponse {
    fn from(page: Paginated<Project>) -> Self {
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
    tag = "project",
    summary = "List projects",
    description = "Lists the projects of a company. Search also matches the owning customer's name and email; `customer.name` is a valid sort key.",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
        QueryRequest
    ),
    responses(
        (status = 200, body = GetProjectsResponse),
        (status = 400, description = "Malformed filter")
    ),
)]
pub async fn get_projects(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    ListQuery(query): ListQuery,
) -> Result<Response<GetProjectsResponse>, ApiError> {
    let projects = state
        .service
        .list_projects(ListProjectsInput { company_id, query })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProjectsResponse::from(projects)))
}
