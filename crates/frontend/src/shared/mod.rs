pub mod api_client;
pub mod api_utils;
pub mod app_context;
pub mod config;
pub mod notice;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
