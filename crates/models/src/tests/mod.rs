
use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::{db, schema};

/// Connect to the test database and make sure the tables exist.
/// `None` means the test should be skipped.
pub(crate) async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let Some(url) = db::test_database_url() else {
        eprintln!("skip: neither DATABASE_TEST_URL nor DATABASE_URL is set");
        return Ok(None);
    };
    let cfg = configs::DatabaseConfig { url, min_connections: 1, ..Default::default() };
    let db = db::connect_with_config(&cfg).await?;
    schema::ensure_schema(&db).await?;
    Ok(Some(db))
}
