use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    project::{
        entities::Project,
        value_objects::{CreateProjectInput, GetProjectInput, ListProjectsInput},
    },
    query::value_objects::{Paginated, QuerySpec},
};

pub trait ProjectService: Send + Sync {
    fn list_projects(
        &self,
        input: ListProjectsInput,
    ) -> impl Future<Output = Result<Paginated<Project>, CoreError>> + Send;

    fn get_project(
        &self,
        input: GetProjectInput,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;

    fn create_project(
        &self,
        input: CreateProjectInput,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProjectRepository: Send + Sync {
    fn list_by_company(
        &self,
        company_id: Uuid,
        spec: QuerySpec,
    ) -> impl Future<Output = Result<(Vec<Project>, u64), CoreError>> + Send;

    fn get_by_id(
        &self,
        company_id: Uuid,
        project_id: Uuid,
    ) -> impl Future<Output = Result<Option<Project>, CoreError>> + Send;

    fn create_project(
        &self,
        project: Project,
    ) -> impl Future<Output = Result<Project, CoreError>> + Send;
}
