use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::query::value_objects::QueryDefaults;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SiteGuardConfig {
    pub database: DatabaseConfig,
    pub query: QueryDefaults,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
