//! Idempotent table creation derived from the entity definitions.
//!
//! Tables are created with `IF NOT EXISTS` in dependency order; existing
//! tables are never altered.
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};
use tracing::info;

use crate::{company, invoice};

pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_if_missing(db, company::Entity).await?;
    create_if_missing(db, invoice::Entity).await?;
    info!(event = "schema_ready", "companies and invoices tables present");
    Ok(())
}

async fn create_if_missing<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
