use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::value_objects::{Paginated, QuerySpec},
    report::{
        entities::Report,
        value_objects::{CreateReportInput, GetReportInput, ListReportsInput},
    },
};

pub trait ReportService: Send + Sync {
    fn list_reports(
        &self,
        input: ListReportsInput,
    ) -> impl Future<Output = Result<Paginated<Report>, CoreError>> + Send;

    fn get_report(
        &self,
        input: GetReportInput,
    ) -> impl Future<Output = Result<Report, CoreError>> + Send;

    fn create_report(
        &self,
        input: CreateReportInput,
    ) -> impl Future<Output = Result<Report, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReportRepository: Send + Sync {
    fn list_by_company(
        &self,
        company_id: Uuid,
        spec: QuerySpec,
    ) -> impl Future<Output = Result<(Vec<Report>, u64), CoreError>> + Send;

    fn get_by_id(
        &self,
        company_id: Uuid,
        report_id: Uuid,
    ) -> impl Future<Output = Result<Option<Report>, CoreError>> + Send;

    fn create_report(
        &self,
        report: Report,
    ) -> impl Future<Output = Result<Report, CoreError>> + Send;
}
