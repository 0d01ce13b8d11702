pub mod analytics;
pub mod dto;

pub use analytics::{monthly_trend, summarize, top_products};
pub use dto::*;
