use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::customer::{
    entities::Customer, ports::CustomerService, value_objects::GetCustomerInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCustomerResponse {
    pub data: Customer,
}

#[utoipa::path(
    get,
    path = "/{customer_id}",
    tag = "customer",
    summary = "Get customer",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
        ("customer_id" = Uuid, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, body = GetCustomerResponse),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn get_customer(
    Path((company_id, customer_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<GetCustomerResponse>, ApiError> {
    let customer = state
        .service
        .get_customer(GetCustomerInput {
            company_id,
            customer_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCustomerResponse { data: customer }))
}
