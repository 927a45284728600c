use axum::{extract::State, http::StatusCode, Json};
use models::invoice;
use service::domain::{CreateInvoiceInput, InvoiceDetail, UpdateInvoiceInput};
use service::invoice_service;
use tracing::info;

use crate::{
    envelope::{InvoiceEnvelope, InvoicesEnvelope, StatusEnvelope},
    errors::ApiError,
    extract::{AppJson, AppPath},
    routes::ServerState,
};

#[utoipa::path(
    get, path = "/invoices", tag = "invoices",
    responses((status = 200, description = "All invoices as {id, comp_code}", body = crate::openapi::InvoicesEnvelopeDoc))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<InvoicesEnvelope>, ApiError> {
    let invoices = invoice_service::list_invoices(state.db.as_ref()).await?;
    info!(count = invoices.len(), "list invoices");
    Ok(Json(InvoicesEnvelope { invoices }))
}

#[utoipa::path(
    get, path = "/invoices/{id}", tag = "invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Invoice with its company", body = crate::openapi::InvoiceDetailEnvelopeDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 404, description = "No such invoice", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<InvoiceEnvelope<InvoiceDetail>>, ApiError> {
    let invoice = invoice_service::get_invoice(state.db.as_ref(), id).await?;
    Ok(Json(InvoiceEnvelope { invoice }))
}

#[utoipa::path(
    post, path = "/invoices", tag = "invoices",
    request_body = crate::openapi::CreateInvoiceRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::InvoiceEnvelopeDoc),
        (status = 400, description = "Missing required data, bad amount or unknown company", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<CreateInvoiceInput>,
) -> Result<(StatusCode, Json<InvoiceEnvelope<invoice::Model>>), ApiError> {
    let invoice = invoice_service::create_invoice(state.db.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(InvoiceEnvelope { invoice })))
}

#[utoipa::path(
    put, path = "/invoices/{id}", tag = "invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    request_body = crate::openapi::UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::InvoiceEnvelopeDoc),
        (status = 400, description = "Missing required data or invalid change", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 404, description = "No such invoice", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i32>,
    AppJson(input): AppJson<UpdateInvoiceInput>,
) -> Result<Json<InvoiceEnvelope<invoice::Model>>, ApiError> {
    let invoice = invoice_service::update_invoice(state.db.as_ref(), id, input).await?;
    Ok(Json(InvoiceEnvelope { invoice }))
}

#[utoipa::path(
    delete, path = "/invoices/{id}", tag = "invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::StatusDoc),
        (status = 404, description = "No such invoice", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Json<StatusEnvelope>, ApiError> {
    invoice_service::delete_invoice(state.db.as_ref(), id).await?;
    Ok(Json(StatusEnvelope::deleted()))
}
