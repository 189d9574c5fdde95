//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` and `JWT_SECRET` environment variables (reads .env).

use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

const ADMIN_PASSWORD: &str = "Admin123!";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== vitrina Seed Script ===");

    let customer_ids = seed_users(&pool).await?;
    let product_ids = seed_catalog(&pool).await?;
    seed_orders(&pool, &customer_ids, &product_ids).await?;

    println!("\n=== Seed complete! ===");
    println!("Admin login: admin@vitrina.local / {ADMIN_PASSWORD}");

    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<Vec<Uuid>> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = 'admin@vitrina.local')")
            .fetch_one(pool)
            .await?;

    let hash = vitrina::services::auth::hash_password(ADMIN_PASSWORD)?;

    if exists {
        sqlx::query("UPDATE users SET password_hash = $1 WHERE email = 'admin@vitrina.local'")
            .bind(&hash)
            .execute(pool)
            .await?;
        println!("[done] Updated admin password");
    } else {
        sqlx::query(
            "INSERT INTO users (email, password_hash, display_name, role)
             VALUES ('admin@vitrina.local', $1, 'Store Administrator', 'Admin')",
        )
        .bind(&hash)
        .execute(pool)
        .await?;

        let staff_hash = vitrina::services::auth::hash_password("staff123")?;
        sqlx::query(
            "INSERT INTO users (email, password_hash, display_name, role)
             VALUES ('staff@vitrina.local', $1, 'Warehouse Staff', 'Staff')",
        )
        .bind(&staff_hash)
        .execute(pool)
        .await?;

        println!("[done] Created admin and staff users");
    }

    let mut customer_ids = Vec::new();
    for (email, name) in [
        ("ana@example.com", "Ana Pereira"),
        ("marco@example.com", "Marco Silva"),
        ("lucia@example.com", "Lucía Ortega"),
    ] {
        let customer_hash = vitrina::services::auth::hash_password("customer123")?;
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash, display_name, role)
             VALUES ($1, $2, $3, 'Customer')
             ON CONFLICT (email) DO UPDATE SET display_name = EXCLUDED.display_name
             RETURNING id",
        )
        .bind(email)
        .bind(&customer_hash)
        .bind(name)
        .fetch_one(pool)
        .await?;
        customer_ids.push(id);
    }
    println!("[done] Created {} customers", customer_ids.len());

    Ok(customer_ids)
}

async fn seed_catalog(pool: &PgPool) -> anyhow::Result<Vec<(Uuid, String, f64)>> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Catalog already seeded");
        let existing = sqlx::query_as::<_, (Uuid, String, f64)>(
            "SELECT id, name, price FROM products ORDER BY sku",
        )
        .fetch_all(pool)
        .await?;
        return Ok(existing);
    }

    let mut product_ids = Vec::new();
    for (cat_name, slug, products) in [
        (
            "Mugs",
            "mugs",
            vec![
                ("MUG-01", "Espresso Cup", 9.99, 120),
                ("MUG-02", "Stoneware Mug", 14.50, 6),
                ("MUG-03", "Travel Tumbler", 21.00, 0),
            ],
        ),
        (
            "Kettles",
            "kettles",
            vec![
                ("KET-01", "Gooseneck Kettle", 64.00, 18),
                ("KET-02", "Electric Kettle", 49.90, 3),
            ],
        ),
        (
            "Grinders",
            "grinders",
            vec![
                ("GRN-01", "Hand Grinder", 38.00, 44),
                ("GRN-02", "Burr Grinder", 129.00, 9),
            ],
        ),
    ] {
        let category_id: Uuid = sqlx::query_scalar(
            "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id",
        )
        .bind(cat_name)
        .bind(slug)
        .fetch_one(pool)
        .await?;

        for (sku, name, price, stock) in products {
            let id: Uuid = sqlx::query_scalar(
                "INSERT INTO products (sku, name, price, stock, category_id)
                 VALUES ($1, $2, $3, $4, $5) RETURNING id",
            )
            .bind(sku)
            .bind(name)
            .bind(price)
            .bind(stock)
            .bind(category_id)
            .fetch_one(pool)
            .await?;
            product_ids.push((id, name.to_string(), price));
        }
    }

    println!("[done] Created 3 categories and {} products", product_ids.len());
    Ok(product_ids)
}

async fn seed_orders(
    pool: &PgPool,
    customers: &[Uuid],
    products: &[(Uuid, String, f64)],
) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Orders already seeded");
        return Ok(());
    }

    let statuses = [
        "pending",
        "processing",
        "shipped",
        "delivered",
        "delivered",
        "delivered",
        "cancelled",
        "refunded",
        // Legacy spelling from the old document store.
        "PaymentFailed",
    ];
    let methods = ["card", "cod", "paypal"];
    let now = Utc::now();

    for i in 0..60u32 {
        let (product_id, product_name, price) = &products[(i as usize) % products.len()];
        let quantity = 1 + (i % 3) as i32;
        let line_total = *price * f64::from(quantity);
        let items = json!([{
            "product_id": product_id,
            "product_name": product_name,
            "quantity": quantity,
            "line_item_total": line_total,
        }]);

        // Every fourth order is a guest checkout.
        let user_id = if i % 4 == 0 {
            None
        } else {
            Some(customers[(i as usize) % customers.len()])
        };

        let created_at = now - Duration::days(i64::from(i % 45)) - Duration::hours(i64::from(i));

        sqlx::query(
            "INSERT INTO orders (user_id, order_status, payment_method, grand_total, items, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)",
        )
        .bind(user_id)
        .bind(statuses[(i as usize) % statuses.len()])
        .bind(methods[(i as usize) % methods.len()])
        .bind(line_total)
        .bind(&items)
        .bind(created_at)
        .execute(pool)
        .await?;
    }

    println!("[done] Created 60 orders across the last 45 days");
    Ok(())
}
