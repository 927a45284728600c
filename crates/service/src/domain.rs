//! Request payloads and composite read models.
//!
//! Every input field is optional at the wire level; presence is checked by
//! the validators in `models` so a missing field becomes a 400 with a
//! uniform message instead of a deserializer error.

use chrono::NaiveDate;
use models::{company, invoice};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateCompanyInput {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateCompanyInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateInvoiceInput {
    pub comp_code: Option<String>,
    pub amt: Option<f64>,
    pub paid: Option<bool>,
    pub add_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateInvoiceInput {
    pub amt: Option<f64>,
    pub paid: Option<bool>,
    pub paid_date: Option<NaiveDate>,
}

/// An invoice with its owning company nested under `company`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: invoice::Model,
    pub company: company::Model,
}
