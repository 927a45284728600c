use axum::{extract::State, http::StatusCode, Json};
use service::company_service;
use service::domain::{CreateCompanyInput, UpdateCompanyInput};
use tracing::info;

use crate::{
    envelope::{CompaniesEnvelope, CompanyEnvelope, StatusEnvelope},
    errors::ApiError,
    extract::{AppJson, AppPath},
    routes::ServerState,
};

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    responses((status = 200, description = "All companies", body = crate::openapi::CompaniesEnvelopeDoc))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<CompaniesEnvelope>, ApiError> {
    let companies = company_service::list_companies(state.db.as_ref()).await?;
    info!(count = companies.len(), "list companies");
    Ok(Json(CompaniesEnvelope { companies }))
}

#[utoipa::path(
    get, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyEnvelopeDoc),
        (status = 404, description = "No such company", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, AppPath(code): AppPath<String>) -> Result<Json<CompanyEnvelope>, ApiError> {
    let company = company_service::get_company(state.db.as_ref(), &code).await?;
    Ok(Json(CompanyEnvelope { company }))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CreateCompanyRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CompanyEnvelopeDoc),
        (status = 400, description = "Missing required data or company already exists", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<CreateCompanyInput>,
) -> Result<(StatusCode, Json<CompanyEnvelope>), ApiError> {
    let company = company_service::create_company(state.db.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(CompanyEnvelope { company })))
}

#[utoipa::path(
    put, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    request_body = crate::openapi::UpdateCompanyRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyEnvelopeDoc),
        (status = 400, description = "Missing required data", body = crate::openapi::ErrorEnvelopeDoc),
        (status = 404, description = "No such company", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    AppPath(code): AppPath<String>,
    AppJson(input): AppJson<UpdateCompanyInput>,
) -> Result<Json<CompanyEnvelope>, ApiError> {
    let company = company_service::update_company(state.db.as_ref(), &code, input).await?;
    Ok(Json(CompanyEnvelope { company }))
}

#[utoipa::path(
    delete, path = "/companies/{code}", tag = "companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "Deleted, along with its invoices", body = crate::openapi::StatusDoc),
        (status = 404, description = "No such company", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, AppPath(code): AppPath<String>) -> Result<Json<StatusEnvelope>, ApiError> {
    company_service::delete_company(state.db.as_ref(), &code).await?;
    Ok(Json(StatusEnvelope::deleted()))
}
