use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::project::{
    entities::Project, ports::ProjectService, value_objects::CreateProjectInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    project::validators::CreateProjectValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProjectResponse {
    pub data: Project,
}

#[utoipa::path(
    post,
    path = "",
    tag = "project",
    summary = "Create project",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
    ),
    request_body = CreateProjectValidator,
    responses(
        (status = 201, body = CreateProjectResponse),
        (status = 404, description = "Customer not found in this company")
    ),
)]
pub async fn create_project(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProjectValidator>,
) -> Result<Response<CreateProjectResponse>, ApiError> {
    let project = state
        .service
        .create_project(CreateProjectInput {
            company_id,
            customer_id: payload.customer_id,
            name: payload.name,
            project_number: payload.project_number,
            address: payload.address,
            budget: payload.budget,
            start_date: payload.start_date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateProjectResponse { data: project }))
}
