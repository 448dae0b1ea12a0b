pub mod create_project;
pub mod get_project;
pub mod get_projects;
