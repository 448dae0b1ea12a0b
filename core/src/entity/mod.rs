//! Table models for the SiteGuard schema (see `core/migrations`).

pub mod customers;
pub mod projects;
pub mod reports;
