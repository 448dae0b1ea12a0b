pub mod create_customer;
pub mod get_customer;
pub mod get_customers;
