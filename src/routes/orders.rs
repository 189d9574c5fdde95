//! Order routes for the admin panel.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::models::order::{Order, OrderSummary, UpdateOrderStatus};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::orders::{self as order_service, OrderFilters};
use crate::AppState;

/// GET /api/v1/orders — list orders with filters and pagination (staff+).
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<OrderFilters>,
) -> Result<Json<ApiResponse<PagedResult<OrderSummary>>>, AppError> {
    let result = order_service::list(&state.db, &filters, &pagination).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/v1/orders/:id — full order with line items (staff+).
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let order = order_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(order))
}

/// PATCH /api/v1/orders/:id/status — update order status (admin).
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateOrderStatus>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let order = order_service::update_status(&state.db, id, &body.order_status).await?;
    Ok(ApiResponse::success(order))
}
