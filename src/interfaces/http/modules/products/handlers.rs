//! Product handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{ListProductsParams, ProductDto, ProductRequest};
use crate::application::ProductService;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};

#[derive(Clone)]
pub struct ProductState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/produtos",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid field", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<ProductState>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let product = state.service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/produtos",
    tag = "Products",
    params(ListProductsParams),
    responses(
        (status = 200, description = "Products ordered by name", body = Vec<ProductDto>),
        (status = 400, description = "Unknown category", body = ErrorBody)
    )
)]
pub async fn list_products(
    State(state): State<ProductState>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = match params.categoria.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => state.service.list_by_category(category).await?,
        None => state.service.list().await?,
    };
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/produtos/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<ProductState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDto>, ApiError> {
    Ok(Json(state.service.get(&id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/produtos/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid field", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<ProductState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    let product = state.service.update(&id, request.into()).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/produtos/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<ProductState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
