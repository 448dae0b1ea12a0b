use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::create_customer::{__path_create_customer, create_customer};
use super::handlers::get_customer::{__path_get_customer, get_customer};
use super::handlers::get_customers::{__path_get_customers, get_customers};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_customers, get_customer, create_customer))]
pub struct CustomerApiDoc;

pub fn customer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/companies/{{company_id}}/customers",
                state.args.server.root_path
            ),
            get(get_customers),
        )
        .route(
            &format!(
                "{}/companies/{{company_id}}/customers",
                state.args.server.root_path
            ),
            post(create_customer),
        )
        .route(
            &format!(
                "{}/companies/{{company_id}}/customers/{{customer_id}}",
                state.args.server.root_path
            ),
            get(get_customer),
        )
}
