use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect};
use tracing::{error, info, instrument};

use models::company;
use models::errors::ModelError;
use models::invoice::{self, InvoiceChanges, NewInvoice};

use crate::domain::{CreateInvoiceInput, InvoiceDetail, UpdateInvoiceInput};
use crate::errors::ServiceError;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// List every invoice as `{id, comp_code}`.
#[instrument(skip(db))]
pub async fn list_invoices(db: &DatabaseConnection) -> Result<Vec<invoice::Summary>, ServiceError> {
    invoice::Entity::find()
        .select_only()
        .column(invoice::Column::Id)
        .column(invoice::Column::CompCode)
        .into_model::<invoice::Summary>()
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Fetch an invoice joined with its company.
#[instrument(skip(db))]
pub async fn get_invoice(db: &DatabaseConnection, id: i32) -> Result<InvoiceDetail, ServiceError> {
    let row = invoice::Entity::find_by_id(id)
        .find_also_related(company::Entity)
        .one(db)
        .await
        .map_err(ServiceError::db)?;
    match row {
        Some((invoice, Some(company))) => Ok(InvoiceDetail { invoice, company }),
        Some((invoice, None)) => {
            // the foreign key makes this unreachable short of manual tampering
            error!(id = invoice.id, comp_code = %invoice.comp_code, "invoice without company");
            Err(ServiceError::Db(format!("invoice {} references a missing company", invoice.id)))
        }
        None => Err(ServiceError::no_such("invoice")),
    }
}

/// Create an invoice for an existing company.
///
/// `id` and (unless supplied) `add_date` are assigned here. No duplicate
/// detection is done: every accepted request creates a new invoice.
#[instrument(skip(db, input))]
pub async fn create_invoice(db: &DatabaseConnection, input: CreateInvoiceInput) -> Result<invoice::Model, ServiceError> {
    let new = NewInvoice::validate(input.comp_code, input.amt, input.paid, input.add_date, input.paid_date, today())?;
    let owner = company::Entity::find_by_id(new.comp_code.clone()).one(db).await.map_err(ServiceError::db)?;
    if owner.is_none() {
        return Err(ServiceError::Validation("No such company".into()));
    }
    match invoice::create(db, new).await {
        Ok(created) => {
            info!(id = created.id, comp_code = %created.comp_code, "created invoice");
            Ok(created)
        }
        // company deleted between the lookup and the insert
        Err(ModelError::MissingReference(_)) => Err(ServiceError::Validation("No such company".into())),
        Err(e) => Err(e.into()),
    }
}

/// Apply a partial update; flipping `paid` sets or clears `paid_date`.
#[instrument(skip(db, input))]
pub async fn update_invoice(db: &DatabaseConnection, id: i32, input: UpdateInvoiceInput) -> Result<invoice::Model, ServiceError> {
    let changes = InvoiceChanges::validate(input.amt, input.paid, input.paid_date)?;
    let existing = invoice::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::no_such("invoice"))?;
    let updated = match invoice::apply_changes(db, existing, changes, today()).await {
        Ok(updated) => updated,
        Err(ModelError::NotUpdated) => return Err(ServiceError::no_such("invoice")),
        Err(e) => return Err(e.into()),
    };
    info!(id = updated.id, paid = updated.paid, "updated invoice");
    Ok(updated)
}

#[instrument(skip(db))]
pub async fn delete_invoice(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = invoice::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::no_such("invoice"));
    }
    info!(id, "deleted invoice");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company_service;
    use crate::domain::CreateCompanyInput;
    use crate::test_support::{get_db, unique_code};

    async fn seed_company(db: &DatabaseConnection) -> anyhow::Result<company::Model> {
        let code = unique_code("invsvc");
        Ok(company_service::create_company(
            db,
            CreateCompanyInput {
                code: Some(code),
                name: Some("Test Company".into()),
                description: Some("Writer of Tests".into()),
            },
        )
        .await?)
    }

    fn new_invoice(comp_code: &str, amt: f64) -> CreateInvoiceInput {
        CreateInvoiceInput { comp_code: Some(comp_code.to_string()), amt: Some(amt), ..Default::default() }
    }

    #[tokio::test]
    async fn invoice_crud_service() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let owner = seed_company(&db).await?;

        let created = create_invoice(&db, new_invoice(&owner.code, 100.0)).await?;
        assert_eq!(created.comp_code, owner.code);
        assert!(!created.paid);
        assert_eq!(created.add_date, today());

        let listed = list_invoices(&db).await?;
        assert!(listed.contains(&invoice::Summary { id: created.id, comp_code: owner.code.clone() }));

        let detail = get_invoice(&db, created.id).await?;
        assert_eq!(detail.invoice, created);
        assert_eq!(detail.company, owner);

        let updated = update_invoice(&db, created.id, UpdateInvoiceInput { amt: Some(250.0), ..Default::default() }).await?;
        assert_eq!(updated.amt, 250.0);
        assert_eq!(updated.add_date, created.add_date);

        delete_invoice(&db, created.id).await?;
        assert!(matches!(get_invoice(&db, created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_invoice(&db, created.id).await, Err(ServiceError::NotFound(_))));

        company_service::delete_company(&db, &owner.code).await?;
        Ok(())
    }

    #[tokio::test]
    async fn paying_and_unpaying_moves_paid_date() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let owner = seed_company(&db).await?;
        let created = create_invoice(&db, new_invoice(&owner.code, 10.0)).await?;

        let paid = update_invoice(&db, created.id, UpdateInvoiceInput { paid: Some(true), ..Default::default() }).await?;
        assert!(paid.paid);
        assert_eq!(paid.paid_date, Some(today()));

        let unpaid = update_invoice(&db, created.id, UpdateInvoiceInput { paid: Some(false), ..Default::default() }).await?;
        assert!(!unpaid.paid);
        assert!(unpaid.paid_date.is_none());

        company_service::delete_company(&db, &owner.code).await?;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_company_is_rejected() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let res = create_invoice(&db, new_invoice(&unique_code("ghost"), 10.0)).await;
        assert!(matches!(res, Err(ServiceError::Validation(ref m)) if m == "No such company"));
        Ok(())
    }

    #[tokio::test]
    async fn deleting_company_removes_invoices() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let owner = seed_company(&db).await?;
        let created = create_invoice(&db, new_invoice(&owner.code, 10.0)).await?;

        company_service::delete_company(&db, &owner.code).await?;
        assert!(matches!(get_invoice(&db, created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_fail_before_touching_the_database() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let res = create_invoice(&db, CreateInvoiceInput::default()).await;
        assert!(matches!(res, Err(ServiceError::Model(ModelError::Validation(ref m))) if m == "Missing required data"));
        Ok(())
    }
}
