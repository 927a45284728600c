use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, ActiveModelTrait, ConnectionTrait, FromQueryResult, Set};
use serde::{Deserialize, Serialize};

use crate::{
    company,
    errors::ModelError,
    validation::{require_text, validate_amount},
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub comp_code: String,
    #[sea_orm(column_type = "Double")]
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Company }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            // removing a company removes its invoices
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompCode)
                .to(company::Column::Code)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// List projection: only the key and the owning company.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct Summary {
    pub id: i32,
    pub comp_code: String,
}

/// Payment state of an invoice.
///
/// An unpaid invoice never carries a `paid_date`; a paid one always does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payment {
    pub paid: bool,
    pub paid_date: Option<Date>,
}

impl Payment {
    pub const UNPAID: Payment = Payment { paid: false, paid_date: None };

    pub fn of(model: &Model) -> Self {
        Self { paid: model.paid, paid_date: model.paid_date }
    }

    /// Move to the state requested by a client.
    ///
    /// Unpaid -> paid stamps `requested_date` or `today`; paid -> unpaid clears
    /// the date; staying paid keeps the stored date unless a new one is given.
    pub fn transition(self, paid: Option<bool>, requested_date: Option<Date>, today: Date) -> Result<Self, ModelError> {
        let paid = paid.unwrap_or(self.paid);
        if !paid {
            if requested_date.is_some() {
                return Err(ModelError::Validation("paid_date requires a paid invoice".into()));
            }
            return Ok(Self::UNPAID);
        }
        let paid_date = match (requested_date, self.paid, self.paid_date) {
            (Some(d), _, _) => d,
            (None, true, Some(existing)) => existing,
            _ => today,
        };
        Ok(Self { paid: true, paid_date: Some(paid_date) })
    }
}

/// Validated payload for a new invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
    pub payment: Payment,
    pub add_date: Date,
}

impl NewInvoice {
    pub fn validate(
        comp_code: Option<String>,
        amt: Option<f64>,
        paid: Option<bool>,
        add_date: Option<Date>,
        paid_date: Option<Date>,
        today: Date,
    ) -> Result<Self, ModelError> {
        let comp_code = require_text(comp_code)?;
        let amt = validate_amount(amt.ok_or_else(ModelError::missing_data)?)?;
        let payment = Payment::UNPAID.transition(paid, paid_date, today)?;
        Ok(Self { comp_code, amt, payment, add_date: add_date.unwrap_or(today) })
    }
}

/// Partial update over the mutable invoice fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceChanges {
    pub amt: Option<f64>,
    pub paid: Option<bool>,
    pub paid_date: Option<Date>,
}

impl InvoiceChanges {
    pub fn validate(amt: Option<f64>, paid: Option<bool>, paid_date: Option<Date>) -> Result<Self, ModelError> {
        if amt.is_none() && paid.is_none() && paid_date.is_none() {
            return Err(ModelError::missing_data());
        }
        let amt = amt.map(validate_amount).transpose()?;
        Ok(Self { amt, paid, paid_date })
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewInvoice) -> Result<Model, ModelError> {
    let am = ActiveModel {
        comp_code: Set(new.comp_code),
        amt: Set(new.amt),
        paid: Set(new.payment.paid),
        add_date: Set(new.add_date),
        paid_date: Set(new.payment.paid_date),
        ..Default::default()
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn apply_changes<C: ConnectionTrait>(
    db: &C,
    existing: Model,
    changes: InvoiceChanges,
    today: Date,
) -> Result<Model, ModelError> {
    let payment = Payment::of(&existing).transition(changes.paid, changes.paid_date, today)?;
    let mut am: ActiveModel = existing.into();
    if let Some(amt) = changes.amt { am.amt = Set(amt); }
    am.paid = Set(payment.paid);
    am.paid_date = Set(payment.paid_date);
    am.update(db).await.map_err(ModelError::from_db)
}
