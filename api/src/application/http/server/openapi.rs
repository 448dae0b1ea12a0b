use utoipa::OpenApi;

use crate::application::http::{
    customer::router::CustomerApiDoc, health::router::HealthApiDoc,
    project::router::ProjectApiDoc, report::router::ReportApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SiteGuard API"
    ),
    nest(
        (path = "/companies/{company_id}/customers", api = CustomerApiDoc),
        (path = "/companies/{company_id}/projects", api = ProjectApiDoc),
        (path = "/companies/{company_id}/reports", api = ReportApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
