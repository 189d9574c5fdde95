//! Dashboard route: aggregated storefront analytics for the admin panel.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireAdmin;
use crate::services::dashboard::{self, DashboardData};
use crate::services::date_range::CustomRange;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub period: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// GET /api/v1/dashboard — aggregated metrics for the selected period
/// (admin only).
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardData>>, AppError> {
    let period = query.period.as_deref().unwrap_or("month");
    let custom = CustomRange {
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let data =
        dashboard::get_dashboard_data(&state.db, period, Some(&custom), Utc::now()).await?;
    Ok(ApiResponse::success(data))
}
