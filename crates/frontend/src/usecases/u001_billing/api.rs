use crate::shared::api_client::{ApiClient, ApiError, Transport};
use contracts::domain::a003_invoice::{CreateInvoiceRequest, InvoiceReceipt};

pub const CREATE_INVOICE_PATH: &str = "/billing/create";

/// Create invoice; the server prices the lines and decrements stock
pub async fn create_invoice<T: Transport>(
    client: &ApiClient<T>,
    request: &CreateInvoiceRequest,
) -> Result<InvoiceReceipt, ApiError> {
    client.post(CREATE_INVOICE_PATH, request).await
}
