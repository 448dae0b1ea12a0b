use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::customer::entities::Customer;
use crate::entity::customers::{ActiveModel as CustomerActiveModel, Model as CustomerModel};

impl From<CustomerModel> for Customer {
    fn from(model: CustomerModel) -> Self {
        Customer {
            id: model.id,
            company_id: model.company_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<Customer> for CustomerActiveModel {
    fn from(customer: Customer) -> Self {
        CustomerActiveModel {
            id: Set(customer.id),
            company_id: Set(customer.company_id),
            name: Set(customer.name),
            email: Set(customer.email),
            phone: Set(customer.phone),
            address: Set(customer.address),
            is_active: Set(customer.is_active),
            created_at: Set(customer.created_at.fixed_offset()),
            updated_at: Set(customer.updated_at.fixed_offset()),
        }
    }
}
