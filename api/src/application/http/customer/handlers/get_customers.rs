use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use siteguard_core::domain::{
    customer::{entities::Customer, ports::CustomerService, value_objects::ListCustomersInput},
    query::value_objects::{Paginated, QueryRequest},
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
pub struct GetCustomersResponse {
    pub data: Vec<Customer>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl From<Paginated<Customer>> for GetCustomersResponse {
    fn from(page: Paginated<Customer>) -> Self {
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
    tag = "customer",
    summary = "List customers",
    description = "Lists the customers of a company with filtering, free-text search, sorting and pagination.",
    params(
        ("company_id" = Uuid, Path, description = "Company id"),
        QueryRequest
    ),
    responses(
        (status = 200, body = GetCustomersResponse),
        (status = 400, description = "Malformed filter")
    ),
)]
pub async fn get_customers(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    ListQuery(query): ListQuery,
) -> Result<Response<GetCustomersResponse>, ApiError> {
    let customers = state
        .service
        .list_customers(ListCustomersInput { company_id, query })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCustomersResponse::from(customers)))
}
