//! Product catalog reads and admin CRUD.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::pagination::{PagedResult, Pagination};
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::services::orders::FETCH_PAGE_SIZE;

/// Fetch the whole catalog, inactive products included, via the same
/// cursor-exhaustion loop the order reader uses (id cursor, ascending).
///
/// The dashboard needs disabled products too: an out-of-stock product that
/// was disabled is still an out-of-stock product.
pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let mut all: Vec<Product> = Vec::new();
    let mut cursor: Option<Uuid> = None;

    loop {
        let page = match cursor {
            Some(after) => {
                sqlx::query_as::<_, Product>(
                    "SELECT * FROM products WHERE id > $1 ORDER BY id ASC LIMIT $2",
                )
                .bind(after)
                .bind(FETCH_PAGE_SIZE)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id ASC LIMIT $1")
                    .bind(FETCH_PAGE_SIZE)
                    .fetch_all(pool)
                    .await?
            }
        };

        let page_len = page.len() as i64;
        cursor = page.last().map(|p| p.id);
        all.extend(page);
        if page_len < FETCH_PAGE_SIZE {
            break;
        }
    }

    tracing::debug!(products = all.len(), "Drained product catalog");
    Ok(all)
}

/// Filters for product listing.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProductFilters {
    pub category_id: Option<Uuid>,
    /// Include disabled products in the listing (admin panel view).
    #[serde(default)]
    pub include_inactive: bool,
}

/// List products. The storefront default hides inactive products.
pub async fn list(
    pool: &PgPool,
    filters: &ProductFilters,
    pagination: &Pagination,
) -> Result<PagedResult<Product>, AppError> {
    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM products
        WHERE ($1::uuid IS NULL OR category_id = $1)
          AND ($2 OR is_active)
        "#,
    )
    .bind(filters.category_id)
    .bind(filters.include_inactive)
    .fetch_one(pool)
    .await?;

    let items = sqlx::query_as::<_, Product>(
        r#"
        SELECT * FROM products
        WHERE ($1::uuid IS NULL OR category_id = $1)
          AND ($2 OR is_active)
        ORDER BY name ASC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(filters.category_id)
    .bind(filters.include_inactive)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(pool)
    .await?;

    Ok(PagedResult::new(items, total, pagination))
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Product, AppError> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))
}

pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, AppError> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (sku, name, description, price, stock, category_id, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&input.sku)
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.stock)
    .bind(input.category_id)
    .bind(input.is_active)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("SKU '{}' already exists", input.sku))
        }
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::Validation("Unknown category_id".to_string())
        }
        _ => AppError::Database(e),
    })
}

pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateProduct) -> Result<Product, AppError> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    sqlx::query_as::<_, Product>(
        r#"
        UPDATE products SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            price = COALESCE($3, price),
            stock = COALESCE($4, stock),
            category_id = COALESCE($5, category_id),
            is_active = COALESCE($6, is_active),
            updated_at = NOW()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.stock)
    .bind(input.category_id)
    .bind(input.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Product {id} not found")));
    }
    Ok(())
}
