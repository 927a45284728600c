use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;
use tracing::info;

/// Connection string for the test database: `DATABASE_TEST_URL`, then
/// `DATABASE_URL`. `None` when neither is configured.
pub fn test_database_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    env::var("DATABASE_TEST_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .ok()
        .filter(|u| !u.trim().is_empty())
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout())
        .idle_timeout(cfg.idle_timeout())
        .max_lifetime(cfg.max_lifetime())
        .acquire_timeout(cfg.acquire_timeout())
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(
        event = "db_connected",
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool ready"
    );
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let cfg = DatabaseConfig {
            url: "postgres://localhost/biztime".into(),
            max_connections: 7,
            min_connections: 3,
            ..Default::default()
        };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_url(), "postgres://localhost/biztime");
        assert_eq!(opt.get_max_connections(), Some(7));
        assert_eq!(opt.get_min_connections(), Some(3));
    }
}
