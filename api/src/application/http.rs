pub mod customer;
pub mod health;
pub mod project;
pub mod query_extractor;
pub mod report;
pub mod server;
