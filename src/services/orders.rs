//! Order reads and admin operations.
//!
//! The dashboard never queries aggregates in SQL; it drains the order table
//! for the requested window through a cursor-paginated exhaustion loop and
//! reduces in memory. The cursor is the composite `(created_at, id)` so the
//! ascending order is total even when timestamps collide.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::order::{Order, OrderStatus, OrderSummary};
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::date_range::DateRange;

/// Rows fetched per round trip when draining a window.
pub const FETCH_PAGE_SIZE: i64 = 200;

/// Resume point for the windowed fetch loop.
#[derive(Debug, Clone, Copy)]
struct OrderCursor {
    created_at: DateTime<Utc>,
    id: Uuid,
}

/// Fetch every order in the window, ascending by creation time.
///
/// Plain exhaustion loop: pages of [`FETCH_PAGE_SIZE`] until a short page.
/// All rows are materialized before aggregation begins; any database error
/// aborts the whole computation.
pub async fn fetch_all_in_range(pool: &PgPool, range: &DateRange) -> Result<Vec<Order>, AppError> {
    let mut all = Vec::new();
    let mut cursor: Option<OrderCursor> = None;

    loop {
        let page = fetch_page(pool, range, cursor, FETCH_PAGE_SIZE).await?;
        let page_len = page.len() as i64;
        cursor = page.last().map(|o| OrderCursor {
            created_at: o.created_at,
            id: o.id,
        });
        all.extend(page);
        if page_len < FETCH_PAGE_SIZE {
            break;
        }
    }

    tracing::debug!(orders = all.len(), "Drained order window");
    Ok(all)
}

/// One page of the windowed scan, starting after the cursor if present.
async fn fetch_page(
    pool: &PgPool,
    range: &DateRange,
    cursor: Option<OrderCursor>,
    limit: i64,
) -> Result<Vec<Order>, AppError> {
    let rows = match cursor {
        Some(c) => {
            sqlx::query_as::<_, Order>(
                r#"
                SELECT id, user_id, order_status, payment_method, grand_total, items, created_at, updated_at
                FROM orders
                WHERE created_at >= $1 AND created_at <= $2
                  AND (created_at, id) > ($3, $4)
                ORDER BY created_at ASC, id ASC
                LIMIT $5
                "#,
            )
            .bind(range.start)
            .bind(range.end)
            .bind(c.created_at)
            .bind(c.id)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Order>(
                r#"
                SELECT id, user_id, order_status, payment_method, grand_total, items, created_at, updated_at
                FROM orders
                WHERE created_at >= $1 AND created_at <= $2
                ORDER BY created_at ASC, id ASC
                LIMIT $3
                "#,
            )
            .bind(range.start)
            .bind(range.end)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

/// Distinct customers with at least one order strictly before `before`.
///
/// Feeds the new-vs-returning split; guest orders carry no user id and never
/// appear here.
pub async fn customer_ids_before(
    pool: &PgPool,
    before: DateTime<Utc>,
) -> Result<HashSet<Uuid>, AppError> {
    let ids = sqlx::query_scalar::<_, Uuid>(
        "SELECT DISTINCT user_id FROM orders WHERE user_id IS NOT NULL AND created_at < $1",
    )
    .bind(before)
    .fetch_all(pool)
    .await?;
    Ok(ids.into_iter().collect())
}

/// Filters for the admin order list.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OrderFilters {
    pub status: Option<String>,
    pub user_id: Option<Uuid>,
}

/// List orders for the admin panel, newest first.
pub async fn list(
    pool: &PgPool,
    filters: &OrderFilters,
    pagination: &Pagination,
) -> Result<PagedResult<OrderSummary>, AppError> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM orders
        WHERE ($1::text IS NULL OR order_status = $1)
          AND ($2::uuid IS NULL OR user_id = $2)
        "#,
    )
    .bind(&filters.status)
    .bind(filters.user_id)
    .fetch_one(pool)
    .await?;

    let items = sqlx::query_as::<_, OrderSummary>(
        r#"
        SELECT id, user_id, order_status, payment_method, grand_total,
               jsonb_array_length(items)::int AS item_count, created_at
        FROM orders
        WHERE ($1::text IS NULL OR order_status = $1)
          AND ($2::uuid IS NULL OR user_id = $2)
        ORDER BY created_at DESC, id DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(&filters.status)
    .bind(filters.user_id)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(pool)
    .await?;

    Ok(PagedResult::new(items, total, pagination))
}

/// Fetch a single order with its items.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Order, AppError> {
    sqlx::query_as::<_, Order>(
        r#"
        SELECT id, user_id, order_status, payment_method, grand_total, items, created_at, updated_at
        FROM orders WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))
}

/// Update an order's status. The raw string must parse against the closed
/// enumeration; the canonical spelling is what gets stored.
pub async fn update_status(pool: &PgPool, id: Uuid, raw_status: &str) -> Result<Order, AppError> {
    let status = OrderStatus::parse(raw_status).ok_or_else(|| {
        AppError::Validation(format!("Unknown order status '{raw_status}'"))
    })?;

    sqlx::query_as::<_, Order>(
        r#"
        UPDATE orders SET order_status = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING id, user_id, order_status, payment_method, grand_total, items, created_at, updated_at
        "#,
    )
    .bind(status.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))
}
