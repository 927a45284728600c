use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CompanyDoc {
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct CompanyEnvelopeDoc { pub company: CompanyDoc }

#[derive(ToSchema)]
pub struct CompaniesEnvelopeDoc { pub companies: Vec<CompanyDoc> }

#[derive(ToSchema)]
pub struct CreateCompanyRequest {
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct UpdateCompanyRequest {
    pub name: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct InvoiceDoc {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    /// ISO date, `YYYY-MM-DD`
    pub add_date: String,
    pub paid_date: Option<String>,
}

#[derive(ToSchema)]
pub struct InvoiceDetailDoc {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
    pub company: CompanyDoc,
}

#[derive(ToSchema)]
pub struct InvoiceSummaryDoc {
    pub id: i32,
    pub comp_code: String,
}

#[derive(ToSchema)]
pub struct InvoiceEnvelopeDoc { pub invoice: InvoiceDoc }

#[derive(ToSchema)]
pub struct InvoiceDetailEnvelopeDoc { pub invoice: InvoiceDetailDoc }

#[derive(ToSchema)]
pub struct InvoicesEnvelopeDoc { pub invoices: Vec<InvoiceSummaryDoc> }

#[derive(ToSchema)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: f64,
    pub paid: Option<bool>,
    pub add_date: Option<String>,
    pub paid_date: Option<String>,
}

/// At least one field must be present.
#[derive(ToSchema)]
pub struct UpdateInvoiceRequest {
    pub amt: Option<f64>,
    pub paid: Option<bool>,
    pub paid_date: Option<String>,
}

#[derive(ToSchema)]
pub struct StatusDoc { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDetailDoc {
    pub message: String,
    pub status: u16,
}

#[derive(ToSchema)]
pub struct ErrorEnvelopeDoc { pub error: ErrorDetailDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::invoices::list,
        crate::routes::invoices::get,
        crate::routes::invoices::create,
        crate::routes::invoices::update,
        crate::routes::invoices::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyDoc,
            CompanyEnvelopeDoc,
            CompaniesEnvelopeDoc,
            CreateCompanyRequest,
            UpdateCompanyRequest,
            InvoiceDoc,
            InvoiceDetailDoc,
            InvoiceSummaryDoc,
            InvoiceEnvelopeDoc,
            InvoiceDetailEnvelopeDoc,
            InvoicesEnvelopeDoc,
            CreateInvoiceRequest,
            UpdateInvoiceRequest,
            StatusDoc,
            ErrorDetailDoc,
            ErrorEnvelopeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "invoices")
    )
)]
pub struct ApiDoc;
