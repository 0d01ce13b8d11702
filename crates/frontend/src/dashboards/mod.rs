pub mod d400_sales_analytics;

pub use d400_sales_analytics::ui::SalesDashboard;
