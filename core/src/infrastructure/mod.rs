pub mod customer;
pub mod db;
pub mod health;
pub mod project;
pub mod query;
pub mod report;
