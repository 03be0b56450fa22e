//! Order handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CheckoutResponse, CreateOrderRequest, ListOrdersParams, OrderDto, UpdateStatusRequest,
    CHECKOUT_MESSAGE,
};
use crate::application::OrderService;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};

#[derive(Clone)]
pub struct OrderState {
    pub service: Arc<OrderService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/pedidos",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order queued", body = CheckoutResponse),
        (status = 400, description = "Empty order or bad quantity", body = ErrorBody),
        (status = 404, description = "Unknown product or customer", body = ErrorBody),
        (status = 422, description = "Product unavailable", body = ErrorBody)
    )
)]
pub async fn fake_checkout(
    State(state): State<OrderState>,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>), ApiError> {
    let items = request.items.into_iter().map(Into::into).collect();
    let order = state.service.create(request.customer_id, items).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            message: CHECKOUT_MESSAGE.to_string(),
            order: order.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/pedidos",
    tag = "Orders",
    params(ListOrdersParams),
    responses(
        (status = 200, description = "Orders", body = Vec<OrderDto>),
        (status = 400, description = "Unknown status", body = ErrorBody)
    )
)]
pub async fn list_orders(
    State(state): State<OrderState>,
    Query(params): Query<ListOrdersParams>,
) -> Result<Json<Vec<OrderDto>>, ApiError> {
    let status = params.status.as_deref().filter(|s| !s.is_empty());
    let customer = params.cliente_id.as_deref().filter(|c| !c.is_empty());

    let orders = match (status, customer) {
        (Some(status), _) => state.service.list_by_status(status).await?,
        (None, Some(customer_id)) => state.service.list_by_customer(customer_id).await?,
        (None, None) => state.service.list().await?,
    };
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/pedidos/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_order(
    State(state): State<OrderState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDto>, ApiError> {
    Ok(Json(state.service.get(&id).await?.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/pedidos/{id}/status",
    tag = "Orders",
    params(("id" = String, Path, description = "Order id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = OrderDto),
        (status = 400, description = "Unknown status", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_order_status(
    State(state): State<OrderState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<OrderDto>, ApiError> {
    let order = state.service.update_status(&id, &request.status).await?;
    Ok(Json(order.into()))
}
