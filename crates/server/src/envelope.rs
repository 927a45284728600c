//! Top-level JSON objects wrapping returned entities.

use models::{company, invoice};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CompanyEnvelope {
    pub company: company::Model,
}

#[derive(Debug, Serialize)]
pub struct CompaniesEnvelope {
    pub companies: Vec<company::Model>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceEnvelope<T> {
    pub invoice: T,
}

#[derive(Debug, Serialize)]
pub struct InvoicesEnvelope {
    pub invoices: Vec<invoice::Summary>,
}

#[derive(Debug, Serialize)]
pub struct StatusEnvelope {
    pub status: &'static str,
}

impl StatusEnvelope {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
