use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::project::{
    entities::Project, ports::ProjectService, value_objects::GetProjectInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProjectResponse {
    pub data: Project,
}

#[utoipa::path(
    get,
    path = "/{project_id}",
    tag = "project",
    summary = "Get project",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
        ("project_id" = Uuid, Path, description = "Project id"),
    ),
    responses(
        (status = 200, body = GetProjectResponse),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn get_project(
    Path((company_id, project_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<GetProjectResponse>, ApiError> {
    let project = state
        .service
        .get_project(GetProjectInput {
            company_id,
            project_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProjectResponse { data: project }))
}
