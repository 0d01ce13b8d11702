pub mod api_error;
pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
