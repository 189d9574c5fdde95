//! Product catalog routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireAdmin;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::services::products::{self as product_service, ProductFilters};
use crate::AppState;

/// GET /api/v1/products — list products (storefront hides inactive).
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<ProductFilters>,
) -> Result<Json<ApiResponse<PagedResult<Product>>>, AppError> {
    let result = product_service::list(&state.db, &filters, &pagination).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/v1/products/:id — get product by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = product_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(product))
}

/// POST /api/v1/products — create a product (admin).
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<CreateProduct>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = product_service::create(&state.db, &body).await?;
    Ok(ApiResponse::success(product))
}

/// PUT /api/v1/products/:id — update a product (admin).
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProduct>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = product_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::success(product))
}

/// DELETE /api/v1/products/:id — delete a product (admin).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<&'static str>>, AppError> {
    product_service::delete(&state.db, id).await?;
    Ok(ApiResponse::success("Deleted"))
}
