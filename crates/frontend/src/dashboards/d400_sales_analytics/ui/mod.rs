mod dashboard;
mod summary_cards;
mod top_products;
mod trend_chart;

pub use dashboard::SalesDashboard;
