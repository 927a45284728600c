//! Service layer providing the BizTime operations on top of models.
//! - Separates business rules (duplicate codes, company existence, payment
//!   transitions) from HTTP handling.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Every operation returns a typed `ServiceError`.

pub mod errors;
pub mod domain;
pub mod company_service;
pub mod invoice_service;
#[cfg(test)]
pub mod test_support;
