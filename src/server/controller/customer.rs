use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::customer::Invoice;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::MessageDto,
        customer::{CreateCustomerDto, CustomerDto, InvoiceDto},
    },
    server::{
        error::AppError,
        model::customer::CreateCustomerParams,
        service::customer::CustomerService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "Customers";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_customer))
        .routes(routes!(get_invoices, add_invoice))
}

/// Create a customer.
///
/// The customer starts without invoices. userName is not checked for uniqueness.
///
/// # Returns
/// - `200 OK` - The created customer including its identifier
/// - `500 Internal Server Error` - Malformed request body
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 200, description = "Created customer", body = CustomerDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCustomerParams::from_dto(payload);

    let customer = CustomerService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Add an invoice to a customer.
///
/// # Arguments
/// - `user_name` - userName of the customer
/// - `payload` - Invoice with its line items
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - No customer has the userName
/// - `500 Internal Server Error` - Malformed request body
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/customers/{user_name}/invoices",
    tag = CUSTOMER_TAG,
    params(
        ("user_name" = String, Path, description = "userName of the customer")
    ),
    request_body = InvoiceDto,
    responses(
        (status = 200, description = "Invoice added", body = MessageDto),
        (status = 401, description = "Invalid userName", body = MessageDto),
        (status = 500, description = "Malformed request body", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn add_invoice(
    State(state): State<AppState>,
    AppPath(user_name): AppPath<String>,
    AppJson(payload): AppJson<InvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    CustomerService::new(&state.db)
        .add_invoice(&user_name, Invoice::from(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Invoice added to customer")),
    ))
}

/// List a customer's invoices in the order they were added.
///
/// # Returns
/// - `200 OK` - The customer's invoices
/// - `401 Unauthorized` - No customer has the userName
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/customers/{user_name}/invoices",
    tag = CUSTOMER_TAG,
    params(
        ("user_name" = String, Path, description = "userName of the customer")
    ),
    responses(
        (status = 200, description = "The customer's invoices", body = Vec<InvoiceDto>),
        (status = 401, description = "Invalid userName", body = MessageDto),
        (status = 501, description = "Database error", body = MessageDto)
    ),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    AppPath(user_name): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = CustomerService::new(&state.db)
        .get_invoices(&user_name)
        .await?;

    let dtos: Vec<InvoiceDto> = invoices.into_iter().map(InvoiceDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
