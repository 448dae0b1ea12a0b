use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::create_report::{__path_create_report, create_report};
use super::handlers::get_report::{__path_get_report, get_report};
use super::handlers::get_reports::{__path_get_reports, get_reports};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_reports, get_report, create_report))]
pub struct ReportApiDoc;

pub fn report_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/companies/{{company_id}}/reports",
                state.args.server.root_path
            ),
            get(get_reports),
        )
        .route(
            &format!(
                "{}/companies/{{company_id}}/reports",
                state.args.server.root_path
            ),
            post(create_report),
        )
        .route(
            &format!(
                "{}/companies/{{company_id}}/reports/{{report_id}}",
                state.args.server.root_path
            ),
            get(get_report),
        )
}
