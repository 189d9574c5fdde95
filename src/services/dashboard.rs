//! Admin dashboard aggregation.
//!
//! One invocation drains the order window and the product catalog through the
//! reader loops, then reduces everything in memory with one forward pass per
//! metric group. The reduce itself ([`aggregate`]) is a pure function of its
//! input snapshots, so identical snapshots produce identical output.
//!
//! Currency outputs are rounded to 2 decimals, half away from zero, on final
//! values only — never on intermediate sums.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::order::{Order, OrderStatus};
use crate::models::product::Product;
use crate::services::date_range::{self, CustomRange, DateRange};
use crate::services::{orders, products};

/// Products with stock strictly below this (but above zero) count as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// How many orders the recent-orders feed shows.
const RECENT_ORDERS_LIMIT: usize = 5;

/// How many products the top-sellers list shows.
const TOP_PRODUCTS_LIMIT: usize = 10;

/// Aggregated dashboard payload for the admin overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub sales_summary: SalesSummary,
    pub product_summary: ProductSummary,
    pub customer_summary: CustomerSummary,
    pub order_status_summary: OrderStatusSummary,
    pub sales_by_category: Vec<CategorySales>,
    pub sales_by_payment_method: Vec<PaymentMethodSales>,
    pub sales_over_time: Vec<DailySales>,
    pub recent_orders: Vec<RecentOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_orders: i64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub total_products: i64,
    pub low_stock_products: i64,
    pub out_of_stock_products: i64,
    pub top_selling_products: Vec<TopProduct>,
}

/// Per-product sales within the window, keyed by the order items' own
/// product id and name snapshots — a product deleted from the catalog still
/// shows up here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i64,
    pub sales: f64,
}

/// Distinct signed-in customers in the window. A customer is "returning" iff
/// they placed at least one order strictly before the window start; guest
/// orders are excluded entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub total_customers: i64,
    pub new_customers: i64,
    pub returning_customers: i64,
}

/// Fixed-key histogram over the order status enumeration. Orders whose stored
/// status does not parse are dropped from every bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderStatusSummary {
    pub pending: i64,
    pub processing: i64,
    pub shipped: i64,
    pub delivered: i64,
    pub cancelled: i64,
    pub returned: i64,
    pub payment_failed: i64,
    pub refunded: i64,
}

impl OrderStatusSummary {
    fn bucket_mut(&mut self, status: OrderStatus) -> &mut i64 {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Processing => &mut self.processing,
            OrderStatus::Shipped => &mut self.shipped,
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::Cancelled => &mut self.cancelled,
            OrderStatus::Returned => &mut self.returned,
            OrderStatus::PaymentFailed => &mut self.payment_failed,
            OrderStatus::Refunded => &mut self.refunded,
        }
    }

    /// Sum over all buckets.
    pub fn total(&self) -> i64 {
        self.pending
            + self.processing
            + self.shipped
            + self.delivered
            + self.cancelled
            + self.returned
            + self.payment_failed
            + self.refunded
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub category_id: Uuid,
    pub sales: f64,
    pub orders: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethodSales {
    pub payment_method: String,
    pub sales: f64,
    pub orders: i64,
}

/// One calendar day of the window, zero-filled when no orders landed on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: String,
    pub sales: f64,
    pub orders: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentOrder {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub order_status: String,
    pub payment_method: String,
    pub grand_total: f64,
    pub item_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Resolve the period, drain both readers, reduce.
///
/// The reader calls are sequential awaited round trips; the first error
/// anywhere aborts the whole computation — no partial dashboard.
pub async fn get_dashboard_data(
    pool: &PgPool,
    period: &str,
    custom: Option<&CustomRange>,
    now: DateTime<Utc>,
) -> Result<DashboardData, AppError> {
    let range = date_range::resolve_range(period, custom, now)?;
    let orders = orders::fetch_all_in_range(pool, &range).await?;
    let products = products::fetch_all(pool).await?;
    let prior_customers = orders::customer_ids_before(pool, range.start).await?;

    tracing::info!(
        period,
        orders = orders.len(),
        products = products.len(),
        "Computing dashboard"
    );

    Ok(aggregate(&orders, &products, &prior_customers, &range))
}

/// Reduce the in-memory snapshots into the dashboard payload.
///
/// `orders` must be ascending by creation time (the reader guarantees it);
/// `prior_customers` is the set of user ids with orders strictly before
/// `range.start`. Pure: no I/O, no clock reads.
pub fn aggregate(
    orders: &[Order],
    products: &[Product],
    prior_customers: &HashSet<Uuid>,
    range: &DateRange,
) -> DashboardData {
    DashboardData {
        sales_summary: sales_summary(orders),
        product_summary: product_summary(orders, products),
        customer_summary: customer_summary(orders, prior_customers),
        order_status_summary: order_status_summary(orders),
        sales_by_category: sales_by_category(orders, products),
        sales_by_payment_method: sales_by_payment_method(orders),
        sales_over_time: sales_over_time(orders, range),
        recent_orders: recent_orders(orders),
    }
}

/// Round half away from zero to 2 decimals (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sales_summary(orders: &[Order]) -> SalesSummary {
    let total_orders = orders.len() as i64;
    let raw_total: f64 = orders.iter().map(|o| o.grand_total).sum();
    let average = if total_orders > 0 {
        round2(raw_total / total_orders as f64)
    } else {
        0.0
    };
    SalesSummary {
        total_sales: round2(raw_total),
        total_orders,
        average_order_value: average,
    }
}

fn product_summary(orders: &[Order], products: &[Product]) -> ProductSummary {
    let mut low_stock = 0;
    let mut out_of_stock = 0;
    for product in products {
        if product.stock == 0 {
            out_of_stock += 1;
        } else if product.stock < LOW_STOCK_THRESHOLD {
            low_stock += 1;
        }
    }

    struct Accum {
        name: String,
        quantity: i64,
        sales: f64,
    }
    let mut by_product: HashMap<Uuid, Accum> = HashMap::new();
    for order in orders {
        for item in order.items.iter() {
            let entry = by_product.entry(item.product_id).or_insert_with(|| Accum {
                name: item.product_name.clone(),
                quantity: 0,
                sales: 0.0,
            });
            entry.quantity += i64::from(item.quantity);
            entry.sales += item.line_item_total;
        }
    }

    let mut top: Vec<TopProduct> = by_product
        .into_iter()
        .map(|(product_id, a)| TopProduct {
            product_id,
            product_name: a.name,
            quantity: a.quantity,
            sales: round2(a.sales),
        })
        .collect();
    // Secondary key keeps the ordering total when sales values tie.
    top.sort_by(|a, b| {
        b.sales
            .total_cmp(&a.sales)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    top.truncate(TOP_PRODUCTS_LIMIT);

    ProductSummary {
        total_products: products.len() as i64,
        low_stock_products: low_stock,
        out_of_stock_products: out_of_stock,
        top_selling_products: top,
    }
}

fn customer_summary(orders: &[Order], prior_customers: &HashSet<Uuid>) -> CustomerSummary {
    let in_window: HashSet<Uuid> = orders.iter().filter_map(|o| o.user_id).collect();
    let returning = in_window
        .iter()
        .filter(|id| prior_customers.contains(id))
        .count() as i64;
    let total = in_window.len() as i64;
    CustomerSummary {
        total_customers: total,
        new_customers: total - returning,
        returning_customers: returning,
    }
}

fn order_status_summary(orders: &[Order]) -> OrderStatusSummary {
    let mut summary = OrderStatusSummary::default();
    for order in orders {
        if let Some(status) = order.status() {
            *summary.bucket_mut(status) += 1;
        }
    }
    summary
}

fn sales_by_category(orders: &[Order], products: &[Product]) -> Vec<CategorySales> {
    let category_of: HashMap<Uuid, Uuid> =
        products.iter().map(|p| (p.id, p.category_id)).collect();

    let mut buckets: HashMap<Uuid, (f64, i64)> = HashMap::new();
    for order in orders {
        // An order counts at most once per category, however many of its
        // items fall into it.
        let mut seen: HashSet<Uuid> = HashSet::new();
        for item in order.items.iter() {
            // Items whose product left the catalog cannot be attributed.
            let Some(&category_id) = category_of.get(&item.product_id) else {
                continue;
            };
            let bucket = buckets.entry(category_id).or_insert((0.0, 0));
            bucket.0 += item.line_item_total;
            if seen.insert(category_id) {
                bucket.1 += 1;
            }
        }
    }

    let mut rows: Vec<CategorySales> = buckets
        .into_iter()
        .map(|(category_id, (sales, order_count))| CategorySales {
            category_id,
            sales: round2(sales),
            orders: order_count,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.sales
            .total_cmp(&a.sales)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    rows
}

fn sales_by_payment_method(orders: &[Order]) -> Vec<PaymentMethodSales> {
    let mut buckets: HashMap<&str, (f64, i64)> = HashMap::new();
    for order in orders {
        let bucket = buckets.entry(order.payment_method.as_str()).or_insert((0.0, 0));
        bucket.0 += order.grand_total;
        bucket.1 += 1;
    }

    let mut rows: Vec<PaymentMethodSales> = buckets
        .into_iter()
        .map(|(method, (sales, order_count))| PaymentMethodSales {
            payment_method: method.to_string(),
            sales: round2(sales),
            orders: order_count,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.sales
            .total_cmp(&a.sales)
            .then_with(|| a.payment_method.cmp(&b.payment_method))
    });
    rows
}

fn sales_over_time(orders: &[Order], range: &DateRange) -> Vec<DailySales> {
    let first_day = range.start.date_naive();
    let last_day = range.end.date_naive();

    // Zero-fill every calendar day of the window up front.
    let mut days: BTreeMap<NaiveDate, (f64, i64)> = first_day
        .iter_days()
        .take_while(|d| *d <= last_day)
        .map(|d| (d, (0.0, 0)))
        .collect();

    for order in orders {
        if let Some(bucket) = days.get_mut(&order.created_at.date_naive()) {
            bucket.0 += order.grand_total;
            bucket.1 += 1;
        }
    }

    // BTreeMap iteration is ascending, which for ISO dates matches the
    // ascending string order the client expects.
    days.into_iter()
        .map(|(day, (sales, order_count))| DailySales {
            date: day.format("%Y-%m-%d").to_string(),
            sales: round2(sales),
            orders: order_count,
        })
        .collect()
}

fn recent_orders(orders: &[Order]) -> Vec<RecentOrder> {
    // Input is ascending; the feed wants the chronologically last few,
    // newest first.
    orders
        .iter()
        .rev()
        .take(RECENT_ORDERS_LIMIT)
        .map(|o| RecentOrder {
            id: o.id,
            user_id: o.user_id,
            order_status: o.order_status.clone(),
            payment_method: o.payment_method.clone(),
            grand_total: o.grand_total,
            item_count: o.items.len() as i64,
            created_at: o.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderItem;
    use chrono::TimeZone;
    use sqlx::types::Json;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn order(
        created_at: DateTime<Utc>,
        grand_total: f64,
        status: &str,
        payment_method: &str,
        user_id: Option<Uuid>,
        items: Vec<OrderItem>,
    ) -> Order {
        Order {
            id: Uuid::new_v4(),
            user_id,
            order_status: status.to_string(),
            payment_method: payment_method.to_string(),
            grand_total,
            items: Json(items),
            created_at,
            updated_at: created_at,
        }
    }

    fn item(product_id: Uuid, name: &str, quantity: i32, total: f64) -> OrderItem {
        OrderItem {
            product_id,
            product_name: name.to_string(),
            quantity,
            line_item_total: total,
        }
    }

    fn product(id: Uuid, category_id: Uuid, stock: i32) -> Product {
        Product {
            id,
            sku: format!("SKU-{id}"),
            name: "Product".to_string(),
            description: None,
            price: 10.0,
            stock,
            category_id,
            is_active: true,
            created_at: at(2024, 1, 1, 0),
            updated_at: at(2024, 1, 1, 0),
        }
    }

    fn day_range(start: DateTime<Utc>, end: DateTime<Utc>) -> DateRange {
        DateRange { start, end }
    }

    #[test]
    fn sales_summary_rounds_average_to_two_decimals() {
        let range = day_range(at(2024, 6, 15, 0), at(2024, 6, 15, 23));
        let orders = vec![
            order(at(2024, 6, 15, 9), 100.0, "delivered", "card", None, vec![]),
            order(at(2024, 6, 15, 10), 50.0, "delivered", "card", None, vec![]),
            order(at(2024, 6, 15, 11), 25.0, "delivered", "card", None, vec![]),
        ];
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        assert_eq!(data.sales_summary.total_sales, 175.0);
        assert_eq!(data.sales_summary.total_orders, 3);
        assert_eq!(data.sales_summary.average_order_value, 58.33);
    }

    #[test]
    fn empty_order_set_yields_zeroes_not_nan() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 3, 23));
        let data = aggregate(&[], &[], &HashSet::new(), &range);
        assert_eq!(data.sales_summary.total_sales, 0.0);
        assert_eq!(data.sales_summary.total_orders, 0);
        assert_eq!(data.sales_summary.average_order_value, 0.0);
        assert!(data.recent_orders.is_empty());
        assert_eq!(data.order_status_summary.total(), 0);
        // Zero-filled series still covers every day.
        assert_eq!(data.sales_over_time.len(), 3);
        assert!(data.sales_over_time.iter().all(|d| d.sales == 0.0 && d.orders == 0));
    }

    #[test]
    fn stock_health_counts_low_and_out_of_stock() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let cat = Uuid::new_v4();
        let products = vec![
            product(Uuid::new_v4(), cat, 0),
            product(Uuid::new_v4(), cat, 5),
            product(Uuid::new_v4(), cat, 10),
            product(Uuid::new_v4(), cat, 250),
        ];
        let data = aggregate(&[], &products, &HashSet::new(), &range);
        assert_eq!(data.product_summary.total_products, 4);
        assert_eq!(data.product_summary.out_of_stock_products, 1);
        assert_eq!(data.product_summary.low_stock_products, 1);
    }

    #[test]
    fn status_histogram_drops_unknown_but_keeps_legacy_literal() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let orders = vec![
            order(at(2024, 6, 1, 1), 10.0, "pending", "card", None, vec![]),
            order(at(2024, 6, 1, 2), 10.0, "pending", "card", None, vec![]),
            order(at(2024, 6, 1, 3), 10.0, "PaymentFailed", "card", None, vec![]),
            order(at(2024, 6, 1, 4), 10.0, "paymentFailed", "card", None, vec![]),
            order(at(2024, 6, 1, 5), 10.0, "on-hold", "card", None, vec![]),
        ];
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        assert_eq!(data.order_status_summary.pending, 2);
        assert_eq!(data.order_status_summary.payment_failed, 2);
        // 5 orders, 1 unrecognized status dropped.
        assert_eq!(data.order_status_summary.total(), 4);
        // The dropped order still counts toward sales.
        assert_eq!(data.sales_summary.total_orders, 5);
    }

    #[test]
    fn customers_split_new_vs_returning_excluding_guests() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let orders = vec![
            order(at(2024, 6, 1, 1), 10.0, "pending", "card", Some(alice), vec![]),
            order(at(2024, 6, 1, 2), 10.0, "pending", "card", Some(alice), vec![]),
            order(at(2024, 6, 1, 3), 10.0, "pending", "card", Some(bob), vec![]),
            order(at(2024, 6, 1, 4), 10.0, "pending", "card", None, vec![]),
        ];
        let prior: HashSet<Uuid> = [alice].into_iter().collect();
        let data = aggregate(&orders, &[], &prior, &range);
        assert_eq!(data.customer_summary.total_customers, 2);
        assert_eq!(data.customer_summary.returning_customers, 1);
        assert_eq!(data.customer_summary.new_customers, 1);
    }

    #[test]
    fn category_sales_counts_each_order_once_per_category() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let mugs = Uuid::new_v4();
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let products = vec![product(p1, mugs, 10), product(p2, mugs, 10)];
        let orders = vec![order(
            at(2024, 6, 1, 9),
            30.0,
            "delivered",
            "card",
            None,
            vec![item(p1, "Mug A", 1, 10.0), item(p2, "Mug B", 2, 20.0)],
        )];
        let data = aggregate(&orders, &products, &HashSet::new(), &range);
        assert_eq!(data.sales_by_category.len(), 1);
        assert_eq!(data.sales_by_category[0].category_id, mugs);
        assert_eq!(data.sales_by_category[0].sales, 30.0);
        assert_eq!(data.sales_by_category[0].orders, 1);
    }

    #[test]
    fn uncatalogued_product_skips_category_but_stays_in_top_sellers() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let ghost = Uuid::new_v4();
        let orders = vec![order(
            at(2024, 6, 1, 9),
            99.0,
            "delivered",
            "card",
            None,
            vec![item(ghost, "Discontinued Lamp", 1, 99.0)],
        )];
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        assert!(data.sales_by_category.is_empty());
        assert_eq!(data.product_summary.top_selling_products.len(), 1);
        let top = &data.product_summary.top_selling_products[0];
        assert_eq!(top.product_id, ghost);
        assert_eq!(top.product_name, "Discontinued Lamp");
        assert_eq!(top.sales, 99.0);
        assert_eq!(data.sales_summary.total_sales, 99.0);
    }

    #[test]
    fn top_sellers_sorted_by_sales_and_capped_at_ten() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let items: Vec<OrderItem> = (0..12)
            .map(|i| item(Uuid::new_v4(), &format!("P{i}"), 1, (i + 1) as f64))
            .collect();
        let orders = vec![order(at(2024, 6, 1, 9), 78.0, "delivered", "card", None, items)];
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        let top = &data.product_summary.top_selling_products;
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].sales, 12.0);
        assert!(top.windows(2).all(|w| w[0].sales >= w[1].sales));
    }

    #[test]
    fn payment_methods_sorted_descending_by_sales() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let orders = vec![
            order(at(2024, 6, 1, 1), 20.0, "pending", "cod", None, vec![]),
            order(at(2024, 6, 1, 2), 50.0, "pending", "card", None, vec![]),
            order(at(2024, 6, 1, 3), 40.0, "pending", "card", None, vec![]),
        ];
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        assert_eq!(data.sales_by_payment_method.len(), 2);
        assert_eq!(data.sales_by_payment_method[0].payment_method, "card");
        assert_eq!(data.sales_by_payment_method[0].sales, 90.0);
        assert_eq!(data.sales_by_payment_method[0].orders, 2);
        assert_eq!(data.sales_by_payment_method[1].payment_method, "cod");
    }

    #[test]
    fn sales_over_time_covers_every_day_ascending() {
        let range = day_range(at(2024, 5, 30, 0), at(2024, 6, 2, 23));
        let orders = vec![
            order(at(2024, 5, 31, 9), 10.0, "pending", "card", None, vec![]),
            order(at(2024, 5, 31, 19), 15.0, "pending", "card", None, vec![]),
            order(at(2024, 6, 2, 9), 20.0, "pending", "card", None, vec![]),
        ];
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        let series = &data.sales_over_time;
        assert_eq!(series.len(), 4);
        let dates: Vec<&str> = series.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["2024-05-30", "2024-05-31", "2024-06-01", "2024-06-02"]);
        assert_eq!(series[1].sales, 25.0);
        assert_eq!(series[1].orders, 2);
        assert_eq!(series[2].sales, 0.0);
        assert_eq!(series[2].orders, 0);
    }

    #[test]
    fn recent_orders_are_last_five_newest_first() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let orders: Vec<Order> = (0..7)
            .map(|h| order(at(2024, 6, 1, h), h as f64, "pending", "card", None, vec![]))
            .collect();
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        assert_eq!(data.recent_orders.len(), 5);
        assert_eq!(data.recent_orders[0].created_at, at(2024, 6, 1, 6));
        assert_eq!(data.recent_orders[4].created_at, at(2024, 6, 1, 2));
    }

    #[test]
    fn aggregate_is_idempotent_over_identical_snapshots() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 2, 23));
        let cat = Uuid::new_v4();
        let p1 = Uuid::new_v4();
        let user = Uuid::new_v4();
        let products = vec![product(p1, cat, 3)];
        let orders = vec![
            order(
                at(2024, 6, 1, 9),
                33.33,
                "delivered",
                "card",
                Some(user),
                vec![item(p1, "Mug", 3, 33.33)],
            ),
            order(at(2024, 6, 2, 9), 10.01, "PaymentFailed", "cod", None, vec![]),
        ];
        let prior: HashSet<Uuid> = [user].into_iter().collect();
        let first = aggregate(&orders, &products, &prior, &range);
        let second = aggregate(&orders, &products, &prior, &range);
        assert_eq!(first, second);
    }

    #[test]
    fn status_buckets_sum_to_recognized_order_count() {
        let range = day_range(at(2024, 6, 1, 0), at(2024, 6, 1, 23));
        let orders = vec![
            order(at(2024, 6, 1, 1), 1.0, "shipped", "card", None, vec![]),
            order(at(2024, 6, 1, 2), 1.0, "refunded", "card", None, vec![]),
            order(at(2024, 6, 1, 3), 1.0, "???", "card", None, vec![]),
        ];
        let data = aggregate(&orders, &[], &HashSet::new(), &range);
        assert_eq!(
            data.order_status_summary.total(),
            data.sales_summary.total_orders - 1
        );
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(58.333333), 58.33);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(-0.005), -0.01);
        assert_eq!(round2(175.0), 175.0);
    }
}
