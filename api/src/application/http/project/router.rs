use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::create_project::{__path_create_project, create_project};
use super::handlers::get_project::{__path_get_project, get_project};
use super::handlers::get_projects::{__path_get_projects, get_projects};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_projects, get_project, create_project))]
pub struct ProjectApiDoc;

pub fn project_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/companies/{{company_id}}/projects",
                state.args.server.root_path
            ),
            get(get_projects),
        )
        .route(
            &format!(
                "{}/companies/{{company_id}}/projects",
                state.args.server.root_path
            ),
            post(create_project),
        )
        .route(
            &format!(
                "{}/companies/{{company_id}}/projects/{{project_id}}",
                state.args.server.root_path
            ),
            get(get_project),
        )
}
