use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::customer::{
    entities::Customer, ports::CustomerService, value_objects::CreateCustomerInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    customer::validators::CreateCustomerValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCustomerResponse {
    pub data: Customer,
}

#[utoipa::path(
    post,
    path = "",
    tag = "customer",
    summary = "Create customer",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
    ),
    request_body = CreateCustomerValidator,
    responses(
        (status = 201, body = CreateCustomerResponse)
    ),
)]
pub async fn create_customer(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCustomerValidator>,
) -> Result<Response<CreateCustomerResponse>, ApiError> {
    let customer = state
        .service
        .create_customer(CreateCustomerInput {
            company_id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCustomerResponse { data: customer }))
}
