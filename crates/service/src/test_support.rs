#![cfg(test)]
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

use configs::DatabaseConfig;
use models::db::{connect_with_config, test_database_url};

// Ensure the schema is created only once across the entire test process
static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();

fn test_config(url: String) -> DatabaseConfig {
    DatabaseConfig {
        url,
        max_connections: 20,
        min_connections: 1,
        acquire_timeout_secs: 10,
        ..Default::default()
    }
}

/// Fresh connection for the current test's runtime, or `None` when no test
/// database is configured (the caller then returns early).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let Some(url) = test_database_url() else {
        eprintln!("skip: no DATABASE_TEST_URL / DATABASE_URL configured");
        return Ok(None);
    };
    let cfg = test_config(url);

    SCHEMA_READY
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            models::schema::ensure_schema(&db).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    Ok(Some(connect_with_config(&cfg).await?))
}

/// Company code that will not collide with concurrently running tests.
pub fn unique_code(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
