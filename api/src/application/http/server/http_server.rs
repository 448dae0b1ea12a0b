use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use siteguard_core::{application::create_service, domain::common::SiteGuardConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::customer::router::customer_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::project::router::project_routes;
use crate::application::http::report::router::report_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let siteguard_config = SiteGuardConfig::from(args.as_ref().clone());
    let service = create_service(siteguard_config).await?;

    Ok(AppState::new(args, service))
}

/// OpenAPI document with every path prefixed by the configured root path.
pub fn openapi(root_path: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;
    openapi
}

/// API documentation front-ends and domain routes, without the outer layers.
pub fn app_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();
    let openapi = openapi(&root_path);
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(customer_routes(state.clone()))
        .merge(project_routes(state.clone()))
        .merge(report_routes(state.clone()))
        .merge(health_routes(state))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {:?}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let root_path = state.args.server.root_path.clone();

    let router = app_routes(state.clone())
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
    use serde_json::json;
    use siteguard_core::{
        domain::{
            common::services::Service,
            query::{services::QueryFilterBuilder, value_objects::QueryDefaults},
        },
        entity::{customers, projects},
        infrastructure::{
            customer::repositories::customer_repository::PostgresCustomerRepository,
            health::repository::PostgresHealthCheckRepository,
            project::repositories::project_repository::PostgresProjectRepository,
            report::repositories::report_repository::PostgresReportRepository,
        },
    };
    use uuid::Uuid;

    use super::*;
    use crate::application::http::server::api_entities::api_error::ApiErrorResponse;

    fn server(db: DatabaseConnection) -> TestServer {
        let args = Arc::new(Args::try_parse_from(["siteguard-api", "--root-path", "/api"]).unwrap());
        let service = Service::new(
            PostgresCustomerRepository::new(db.clone()),
            PostgresProjectRepository::new(db.clone()),
            PostgresReportRepository::new(db.clone()),
            PostgresHealthCheckRepository::new(db),
            QueryFilterBuilder::new(QueryDefaults::default()),
        );
        let state = AppState::new(args, service);

        TestServer::new(app_routes(state.clone()).with_state(state)).unwrap()
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    fn customer(company_id: Uuid, name: &str) -> customers::Model {
        let now = chrono::Utc::now().fixed_offset();
        customers::Model {
            id: Uuid::new_v4(),
            company_id,
            name: name.to_string(),
            email: None,
            phone: None,
            address: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_openapi_paths_carry_root_path() {
        let doc = openapi("/api");

        assert!(doc.paths.paths.contains_key("/api/companies/{company_id}/customers"));
        assert!(doc.paths.paths.contains_key("/api/companies/{company_id}/reports/{report_id}"));
        assert!(doc.paths.paths.contains_key("/api/health/ready"));
    }

    #[tokio::test]
    async fn test_list_customers_returns_page_envelope() {
        let company_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(3)))])]])
            .append_query_results([vec![
                customer(company_id, "Acme"),
                customer(company_id, "Acme North"),
            ]])
            .into_connection();

        let response = server(db)
            .get(&format!("/api/companies/{company_id}/customers"))
            .add_query_param("limit", "2")
            .add_query_param("search", "Acme")
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 2);
        assert_eq!(body["total"], 3);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_malformed_filter_is_bad_request() {
        let response = server(empty_db())
            .get(&format!("/api/companies/{}/projects", Uuid::new_v4()))
            .add_query_param("filter", "{bad")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ApiErrorResponse>().code, "E_BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_missing_project_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<projects::Model>::new()])
            .into_connection();

        let response = server(db)
            .get(&format!(
                "/api/companies/{}/projects/{}",
                Uuid::new_v4(),
                Uuid::new_v4()
            ))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_customer_returns_created() {
        let company_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[customer(company_id, "Northside Mould")]])
            .into_connection();

        let response = server(db)
            .post(&format!("/api/companies/{company_id}/customers"))
            .json(&json!({ "name": "Northside Mould" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<serde_json::Value>()["data"]["name"], "Northside Mould");
    }

    #[tokio::test]
    async fn test_negative_sample_count_is_bad_request() {
        let response = server(empty_db())
            .post(&format!("/api/companies/{}/reports", Uuid::new_v4()))
            .json(&json!({
                "project_id": Uuid::new_v4(),
                "kind": "asbestos",
                "title": "Survey",
                "inspection_date": "2024-05-14",
                "sample_count": -3
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_readiness_reports_database() {
        let response = server(empty_db()).get("/api/health/ready").await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["database"], "postgres");
    }
}
