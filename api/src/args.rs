use clap::{Args as ClapArgs, Parser};
use siteguard_core::domain::{
    common::{DatabaseConfig, SiteGuardConfig},
    query::value_objects::QueryDefaults,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "siteguard-api", version, about = "SiteGuard HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "siteguard")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct QueryArgs {
    #[arg(long = "default-page-size", env = "DEFAULT_PAGE_SIZE", default_value_t = 10)]
    pub default_page_size: u64,

    /// Unset keeps page sizes unbounded
    #[arg(long = "max-page-size", env = "MAX_PAGE_SIZE")]
    pub max_page_size: Option<u64>,

    /// Column targeted by the `from`/`to` filter keys
    #[arg(long = "date-range-field", env = "DATE_RANGE_FIELD", default_value = "created_at")]
    pub date_range_field: String,

    #[arg(long = "identity-field", env = "IDENTITY_FIELD", default_value = "id")]
    pub identity_field: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for SiteGuardConfig {
    fn from(args: Args) -> Self {
        SiteGuardConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            query: QueryDefaults {
                limit: args.query.default_page_size,
                max_limit: args.query.max_page_size,
                identity_field: args.query.identity_field,
                date_range_field: args.query.date_range_field,
                ..QueryDefaults::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_convert_into_core_config() {
        let args = Args::try_parse_from([
            "siteguard-api",
            "--database-host",
            "db.internal",
            "--default-page-size",
            "25",
            "--max-page-size",
            "200",
            "--date-range-field",
            "inspection_date",
        ])
        .unwrap();

        let config = SiteGuardConfig::from(args);

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.query.page, 1);
        assert_eq!(config.query.limit, 25);
        assert_eq!(config.query.max_limit, Some(200));
        assert_eq!(config.query.date_range_field, "inspection_date");
    }
}
