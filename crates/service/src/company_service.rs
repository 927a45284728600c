use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{info, instrument};

use models::company::{self, CompanyChanges, NewCompany};
use models::errors::ModelError;

use crate::domain::{CreateCompanyInput, UpdateCompanyInput};
use crate::errors::ServiceError;

const COMPANY_EXISTS: &str = "Company already exists";

/// List every company. Row order is whatever the database returns.
#[instrument(skip(db))]
pub async fn list_companies(db: &DatabaseConnection) -> Result<Vec<company::Model>, ServiceError> {
    company::Entity::find().all(db).await.map_err(ServiceError::db)
}

pub async fn find_company(db: &DatabaseConnection, code: &str) -> Result<Option<company::Model>, ServiceError> {
    company::Entity::find_by_id(code.to_string()).one(db).await.map_err(ServiceError::db)
}

/// Get a company by code, failing with `NotFound` when absent.
#[instrument(skip(db))]
pub async fn get_company(db: &DatabaseConnection, code: &str) -> Result<company::Model, ServiceError> {
    find_company(db, code).await?.ok_or_else(|| ServiceError::no_such("company"))
}

/// Create a company. A code that is already taken is a conflict, whether the
/// lookup sees it or a concurrent insert trips the primary key.
#[instrument(skip(db, input))]
pub async fn create_company(db: &DatabaseConnection, input: CreateCompanyInput) -> Result<company::Model, ServiceError> {
    let new = NewCompany::validate(input.code, input.name, input.description)?;
    if find_company(db, &new.code).await?.is_some() {
        return Err(ServiceError::Conflict(COMPANY_EXISTS.into()));
    }
    match company::create(db, new).await {
        Ok(created) => {
            info!(code = %created.code, "created company");
            Ok(created)
        }
        Err(ModelError::Duplicate(_)) => Err(ServiceError::Conflict(COMPANY_EXISTS.into())),
        Err(e) => Err(e.into()),
    }
}

/// Replace `name` and `description` of an existing company.
#[instrument(skip(db, input))]
pub async fn update_company(
    db: &DatabaseConnection,
    code: &str,
    input: UpdateCompanyInput,
) -> Result<company::Model, ServiceError> {
    let changes = CompanyChanges::validate(input.name, input.description)?;
    let existing = get_company(db, code).await?;
    let updated = match company::apply_changes(db, existing, changes).await {
        Ok(updated) => updated,
        // deleted concurrently after the lookup
        Err(ModelError::NotUpdated) => return Err(ServiceError::no_such("company")),
        Err(e) => return Err(e.into()),
    };
    info!(code = %updated.code, "updated company");
    Ok(updated)
}

/// Delete a company; its invoices go with it.
#[instrument(skip(db))]
pub async fn delete_company(db: &DatabaseConnection, code: &str) -> Result<(), ServiceError> {
    let res = company::Entity::delete_by_id(code.to_string()).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::no_such("company"));
    }
    info!(code = %code, "deleted company");
    Ok(())
}
