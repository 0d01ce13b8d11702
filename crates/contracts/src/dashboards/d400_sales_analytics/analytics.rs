//! Sales analytics over an in-memory snapshot of sales.
//!
//! Every function here is pure: it borrows the snapshot, never mutates or
//! keeps it, and does no I/O. The same input always yields the same output.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::dto::{MonthBucket, SalesAnalytics, SummaryStats, TopProductEntry, TrendPoint};
use crate::domain::a101_product::aggregate::ProductId;
use crate::domain::a105_sale::aggregate::Sale;

/// Months shown on the revenue trend chart
pub const DEFAULT_TREND_WINDOW: usize = 6;

/// Entries in the top-products ranking
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// Count, revenue, units and average order value of `sales`
pub fn summarize(sales: &[Sale]) -> SummaryStats {
    let total_sales = sales.len();
    let total_revenue: Decimal = sales.iter().map(Sale::value).sum();
    let total_units: u64 = sales.iter().map(|s| u64::from(s.quantity)).sum();

    let average_order_value = if total_sales > 0 {
        total_revenue / Decimal::from(total_sales as u64)
    } else {
        Decimal::ZERO
    };

    SummaryStats {
        total_sales,
        total_revenue,
        total_units,
        average_order_value,
    }
}

/// Revenue per month for the `window_size` months ending at
/// `reference_date`'s month, oldest first.
///
/// The result always has exactly `window_size` points; months without sales
/// report zero revenue.
pub fn monthly_trend(sales: &[Sale], reference_date: NaiveDate, window_size: usize) -> Vec<TrendPoint> {
    let mut buckets = Vec::with_capacity(window_size);
    let mut bucket = MonthBucket::of(reference_date);
    for _ in 0..window_size {
        let previous = bucket.previous();
        buckets.push(bucket);
        bucket = previous;
    }
    buckets.reverse();

    let mut revenue_by_month: HashMap<(i32, u32), Decimal> = HashMap::new();
    for sale in sales {
        *revenue_by_month
            .entry(MonthBucket::of(sale.date).key())
            .or_insert(Decimal::ZERO) += sale.value();
    }

    buckets
        .into_iter()
        .map(|bucket| TrendPoint {
            revenue: revenue_by_month
                .get(&bucket.key())
                .copied()
                .unwrap_or(Decimal::ZERO),
            bucket,
        })
        .collect()
}

/// Products ranked by revenue, best first, at most `limit` entries.
///
/// Sales are grouped by product id. Products with equal revenue keep the
/// order in which they first appear in `sales`.
pub fn top_products(sales: &[Sale], limit: usize) -> Vec<TopProductEntry> {
    // first-seen order lives in `entries`; `index` only maps id -> slot
    let mut entries: Vec<TopProductEntry> = Vec::new();
    let mut index: HashMap<ProductId, usize> = HashMap::new();

    for sale in sales {
        let slot = *index.entry(sale.product.id).or_insert_with(|| {
            entries.push(TopProductEntry {
                product_id: sale.product.id,
                product_name: sale.product.name.clone(),
                total_quantity: 0,
                total_revenue: Decimal::ZERO,
            });
            entries.len() - 1
        });

        let entry = &mut entries[slot];
        entry.total_quantity += u64::from(sale.quantity);
        entry.total_revenue += sale.value();
    }

    // sort_by is stable
    entries.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
    entries.truncate(limit);
    entries
}

impl SalesAnalytics {
    pub fn compute(sales: &[Sale], reference_date: NaiveDate, window_size: usize, limit: usize) -> Self {
        Self {
            summary: summarize(sales),
            trend: monthly_trend(sales, reference_date, window_size),
            top_products: top_products(sales, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_product::aggregate::Product;
    use crate::domain::a105_sale::aggregate::SaleId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id: ProductId(id),
            name: name.into(),
            unit_price: Decimal::from(price),
            description: String::new(),
            stock: 0,
        }
    }

    fn sale(id: i64, product: &Product, quantity: u32, date: NaiveDate) -> Sale {
        Sale {
            id: SaleId(id),
            name: format!("Sale {}", id),
            product: product.clone(),
            quantity,
            date,
        }
    }

    /// A(10) x2 in mid January, B(20) x1 late January, A(10) x3 on 1 February
    fn scenario() -> Vec<Sale> {
        let a = product(1, "A", 10);
        let b = product(2, "B", 20);
        vec![
            sale(1, &a, 2, date(2024, 1, 15)),
            sale(2, &b, 1, date(2024, 1, 20)),
            sale(3, &a, 3, date(2024, 2, 1)),
        ]
    }

    #[test]
    fn test_summarize_empty() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_sales, 0);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.total_units, 0);
        assert_eq!(stats.average_order_value, Decimal::ZERO);
    }

    #[test]
    fn test_summarize_scenario() {
        let stats = summarize(&scenario());
        assert_eq!(stats.total_sales, 3);
        assert_eq!(stats.total_revenue, Decimal::from(70));
        assert_eq!(stats.total_units, 6);
        assert_eq!(stats.average_order_value, Decimal::from(70) / Decimal::from(3));
    }

    #[test]
    fn test_summarize_ignores_order() {
        let mut sales = scenario();
        let forward = summarize(&sales);
        sales.reverse();
        assert_eq!(summarize(&sales), forward);
    }

    #[test]
    fn test_trend_always_has_window_size_points() {
        for window in [0, 1, 6, 13, 25] {
            let trend = monthly_trend(&[], date(2024, 7, 4), window);
            assert_eq!(trend.len(), window);
            assert!(trend.iter().all(|p| p.revenue == Decimal::ZERO));
        }
    }

    #[test]
    fn test_trend_january_window_starts_in_previous_august() {
        let trend = monthly_trend(&[], date(2024, 1, 10), 6);
        let keys: Vec<(i32, u32)> = trend.iter().map(|p| p.bucket.key()).collect();
        assert_eq!(
            keys,
            vec![(2023, 7), (2023, 8), (2023, 9), (2023, 10), (2023, 11), (2024, 0)]
        );
        assert_eq!(trend[0].label(), "Aug 2023");
        assert_eq!(trend[5].label(), "Jan 2024");
    }

    #[test]
    fn test_trend_buckets_revenue_by_month() {
        let mut sales = scenario();
        // same month number, previous year: must not land in January 2024
        sales.push(sale(4, &product(3, "C", 100), 1, date(2023, 1, 5)));
        // after the reference month: outside the window
        sales.push(sale(5, &product(3, "C", 100), 1, date(2024, 4, 1)));

        let trend = monthly_trend(&sales, date(2024, 3, 31), 6);
        let revenue: Vec<Decimal> = trend.iter().map(|p| p.revenue).collect();
        assert_eq!(
            revenue,
            vec![
                Decimal::ZERO,      // Oct 2023
                Decimal::ZERO,      // Nov 2023
                Decimal::ZERO,      // Dec 2023
                Decimal::from(40),  // Jan 2024
                Decimal::from(30),  // Feb 2024
                Decimal::ZERO,      // Mar 2024
            ]
        );
    }

    #[test]
    fn test_top_products_scenario() {
        let top = top_products(&scenario(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_name, "A");
        assert_eq!(top[0].total_quantity, 5);
        assert_eq!(top[0].total_revenue, Decimal::from(50));
        assert_eq!(top[1].product_name, "B");
        assert_eq!(top[1].total_quantity, 1);
        assert_eq!(top[1].total_revenue, Decimal::from(20));
    }

    #[test]
    fn test_top_products_ties_keep_first_seen_order() {
        let x = product(10, "X", 5);
        let y = product(11, "Y", 10);
        let z = product(12, "Z", 1);
        let sales = vec![
            sale(1, &z, 1, date(2024, 1, 1)),
            sale(2, &x, 2, date(2024, 1, 1)),
            sale(3, &y, 1, date(2024, 1, 2)),
        ];

        let names: Vec<String> = top_products(&sales, 5)
            .into_iter()
            .map(|e| e.product_name)
            .collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_top_products_groups_by_id_not_name() {
        let first = product(1, "Widget", 10);
        let second = product(2, "Widget", 10);
        let sales = vec![
            sale(1, &first, 1, date(2024, 1, 1)),
            sale(2, &second, 3, date(2024, 1, 1)),
        ];

        let top = top_products(&sales, 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_id, ProductId(2));
        assert_eq!(top[1].product_id, ProductId(1));
    }

    #[test]
    fn test_top_products_uses_price_at_time_of_sale() {
        let old = product(1, "Kettle", 10);
        let mut repriced = old.clone();
        repriced.unit_price = Decimal::from(15);
        let sales = vec![
            sale(1, &old, 1, date(2024, 1, 1)),
            sale(2, &repriced, 1, date(2024, 2, 1)),
        ];

        let top = top_products(&sales, 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].total_revenue, Decimal::from(25));
    }

    #[test]
    fn test_top_products_limit() {
        let sales: Vec<Sale> = (1..=8)
            .map(|i| sale(i, &product(i, &format!("P{}", i), i), 1, date(2024, 1, 1)))
            .collect();
        assert_eq!(top_products(&sales, DEFAULT_TOP_PRODUCTS).len(), 5);
        assert_eq!(top_products(&sales[..3], DEFAULT_TOP_PRODUCTS).len(), 3);
        assert_eq!(top_products(&sales, 5)[0].product_name, "P8");
    }

    #[test]
    fn test_recomputation_is_identical() {
        let sales = scenario();
        let reference = date(2024, 2, 15);
        let first = SalesAnalytics::compute(&sales, reference, DEFAULT_TREND_WINDOW, DEFAULT_TOP_PRODUCTS);
        let second = SalesAnalytics::compute(&sales, reference, DEFAULT_TREND_WINDOW, DEFAULT_TOP_PRODUCTS);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
