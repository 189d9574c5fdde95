//! Category management.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::category::{Category, CreateCategory};

pub async fn list(pool: &PgPool) -> Result<Vec<Category>, AppError> {
    let rows = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, AppError> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING *",
    )
    .bind(&input.name)
    .bind(&input.slug)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("Category slug '{}' already exists", input.slug))
        }
        _ => AppError::Database(e),
    })
}

/// Delete a category. Refused while products still reference it.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let in_use = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM products WHERE category_id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    if in_use > 0 {
        return Err(AppError::Conflict(format!(
            "Category has {in_use} products assigned"
        )));
    }

    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Category {id} not found")));
    }
    Ok(())
}
