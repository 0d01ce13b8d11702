pub mod a101_product;
pub mod a102_service;
pub mod a103_news;
pub mod a104_job;
pub mod a105_sale;
