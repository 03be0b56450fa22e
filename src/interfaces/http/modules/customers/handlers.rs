//! Customer handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CustomerDto, CustomerRequest};
use crate::application::CustomerService;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};

#[derive(Clone)]
pub struct CustomerState {
    pub service: Arc<CustomerService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/clientes",
    tag = "Customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Invalid field", body = ErrorBody),
        (status = 409, description = "CPF already registered", body = ErrorBody)
    )
)]
pub async fn create_customer(
    State(state): State<CustomerState>,
    ValidatedJson(request): ValidatedJson<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerDto>), ApiError> {
    let customer = state.service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/clientes",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers ordered by name", body = Vec<CustomerDto>)
    )
)]
pub async fn list_customers(
    State(state): State<CustomerState>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let customers = state.service.list().await?;
    Ok(Json(customers.into_iter().map(CustomerDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/clientes/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = CustomerDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_customer(
    State(state): State<CustomerState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerDto>, ApiError> {
    Ok(Json(state.service.get(&id).await?.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/clientes/cpf/{cpf}",
    tag = "Customers",
    params(("cpf" = String, Path, description = "CPF, with or without punctuation")),
    responses(
        (status = 200, description = "Customer", body = CustomerDto),
        (status = 400, description = "Invalid CPF", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_customer_by_cpf(
    State(state): State<CustomerState>,
    Path(cpf): Path<String>,
) -> Result<Json<CustomerDto>, ApiError> {
    Ok(Json(state.service.get_by_tax_id(&cpf).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/clientes/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Invalid field", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 409, description = "CPF already registered", body = ErrorBody)
    )
)]
pub async fn update_customer(
    State(state): State<CustomerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CustomerRequest>,
) -> Result<Json<CustomerDto>, ApiError> {
    let customer = state.service.update(&id, request.into()).await?;
    Ok(Json(customer.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/clientes/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_customer(
    State(state): State<CustomerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
