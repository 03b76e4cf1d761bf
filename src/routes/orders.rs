use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    error::{AppError, AppResult},
    models::Order,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/{id}", get(find_by_id))
        .route("/user/{id}", get(find_by_user_id))
        .route("/{id}", patch(update_by_id))
        .route("/{id}", delete(delete_by_id))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created"),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    state.orders.create_order(payload).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Get order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.find_by_id(id).await?;
    Ok(Json(ApiResponse::new(Order::from(order))))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/{id}",
    params(("id" = i64, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Orders of a user", body = ApiResponse<Vec<Order>>),
    ),
    tag = "Orders"
)]
pub async fn find_by_user_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = state.orders.find_by_user_id(id).await?;
    let orders = orders.into_iter().map(Order::from).collect();
    Ok(Json(ApiResponse::new(orders)))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 204, description = "Order updated"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    state.orders.update_by_id(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.orders.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
