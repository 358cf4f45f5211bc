pub mod request;
pub mod response;

pub use request::{CreateInvoiceRequest, InvoiceItemRequest};
pub use response::{InvoiceReceipt, ReceiptLine};
