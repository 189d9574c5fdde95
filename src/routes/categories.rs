//! Category routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireAdmin;
use crate::models::category::{Category, CreateCategory};
use crate::services::categories as category_service;
use crate::AppState;

/// GET /api/v1/categories — list all categories.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let categories = category_service::list(&state.db).await?;
    Ok(ApiResponse::success(categories))
}

/// POST /api/v1/categories — create a category (admin).
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<CreateCategory>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = category_service::create(&state.db, &body).await?;
    Ok(ApiResponse::success(category))
}

/// DELETE /api/v1/categories/:id — delete an empty category (admin).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<&'static str>>, AppError> {
    category_service::delete(&state.db, id).await?;
    Ok(ApiResponse::success("Deleted"))
}
