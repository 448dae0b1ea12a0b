pub mod common;
pub mod customer;
pub mod health;
pub mod project;
pub mod query;
pub mod report;
