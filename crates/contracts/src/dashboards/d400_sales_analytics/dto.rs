use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::a101_product::aggregate::ProductId;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Headline numbers for the sales view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_sales: usize,
    pub total_revenue: Decimal,
    pub total_units: u64,
    /// `total_revenue / total_sales`, zero when there are no sales
    pub average_order_value: Decimal,
}

/// One calendar month of the trailing window.
///
/// Equality and hashing only look at `(year, month_index)`; `label` is a
/// display string derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthBucket {
    pub year: i32,
    /// 0 = January .. 11 = December
    pub month_index: u32,
    pub label: String,
}

impl MonthBucket {
    /// Bucket for `month_index` months after January of `year`; indices past
    /// 11 carry into the following years.
    pub fn new(year: i32, month_index: u32) -> Self {
        let year = year + (month_index / 12) as i32;
        let month_index = month_index % 12;
        let label = format!("{} {}", MONTH_ABBREVIATIONS[month_index as usize], year);
        Self {
            year,
            month_index,
            label,
        }
    }

    /// Bucket containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    /// The month before this one, rolling over into the previous year
    pub fn previous(&self) -> Self {
        if self.month_index == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month_index - 1)
        }
    }

    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month_index)
    }
}

impl PartialEq for MonthBucket {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for MonthBucket {}

impl std::hash::Hash for MonthBucket {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Revenue of one month of the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub bucket: MonthBucket,
    pub revenue: Decimal,
}

impl TrendPoint {
    pub fn label(&self) -> &str {
        &self.bucket.label
    }
}

/// Row of the top-products ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductEntry {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_quantity: u64,
    pub total_revenue: Decimal,
}

/// Everything the sales view shows, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesAnalytics {
    pub summary: SummaryStats,
    pub trend: Vec<TrendPoint>,
    pub top_products: Vec<TopProductEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_not_part_of_equality() {
        let mut relabelled = MonthBucket::new(2024, 0);
        relabelled.label = "January '24".into();
        assert_eq!(relabelled, MonthBucket::new(2024, 0));
        assert_ne!(MonthBucket::new(2024, 0), MonthBucket::new(2023, 0));
    }

    #[test]
    fn test_previous_rolls_over_year() {
        let jan = MonthBucket::new(2024, 0);
        assert_eq!(jan.previous(), MonthBucket::new(2023, 11));
        assert_eq!(jan.previous().label, "Dec 2023");
        assert_eq!(MonthBucket::new(2024, 5).previous(), MonthBucket::new(2024, 4));
    }

    #[test]
    fn test_of_date() {
        let bucket = MonthBucket::of(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(bucket.key(), (2024, 1));
        assert_eq!(bucket.label, "Feb 2024");
        assert_ne!(bucket, MonthBucket::of(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
    }

    #[test]
    fn test_month_index_past_december_carries_into_next_year() {
        let bucket = MonthBucket::new(2024, 12);
        assert_eq!(bucket.key(), (2025, 0));
        assert_eq!(bucket.label, "Jan 2025");
        assert_eq!(MonthBucket::new(2024, 27).key(), (2026, 3));
    }
}
