pub mod api;
pub mod cart;
pub mod catalog;
pub mod presenter;
pub mod receipt_view;
pub mod session;
pub mod submitter;
pub mod view;
pub mod workflow;

pub use view::BillingPage;
